//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Stable iteration order (row-major bricks)
//! - No rendering or platform dependencies beyond the `SoundPlayer` seam

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{boxes_overlap, brick_collision, paddle_collision};
pub use state::{
    Ball, Brick, BrickTier, GamePhase, GameState, Paddle, Pitch, ROW_PALETTE, create_bricks,
};
pub use tick::{TickInput, tick};
