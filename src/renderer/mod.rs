//! wgpu rendering module
//!
//! The frame is a flat list of coloured triangles built on the CPU from the
//! game state each frame.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod text;
pub mod vertex;

pub use pipeline::{RenderState, screen_to_ndc};
pub use vertex::{Vertex, colors};
