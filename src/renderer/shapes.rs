//! Shape generation for 2D primitives
//!
//! Coordinates are screen pixels, origin top-left, y down.

use glam::Vec2;

use super::vertex::Vertex;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(top_left: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let Vec2 { x: x0, y: y0 } = top_left;
    let Vec2 { x: x1, y: y1 } = top_left + size;

    // Two triangles
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a rectangle border drawn inside the given bounds
pub fn outline(top_left: Vec2, size: Vec2, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness.min(size.x / 2.0).min(size.y / 2.0);
    let inner_height = size.y - 2.0 * t;

    let mut vertices = Vec::with_capacity(24);
    // Top and bottom span the full width
    vertices.extend(rect(top_left, Vec2::new(size.x, t), color));
    vertices.extend(rect(
        top_left + Vec2::new(0.0, size.y - t),
        Vec2::new(size.x, t),
        color,
    ));
    // Sides fill the gap between them
    vertices.extend(rect(
        top_left + Vec2::new(0.0, t),
        Vec2::new(t, inner_height),
        color,
    ));
    vertices.extend(rect(
        top_left + Vec2::new(size.x - t, t),
        Vec2::new(t, inner_height),
        color,
    ));
    vertices
}
