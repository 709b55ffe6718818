//! Built-in 5x7 bitmap font
//!
//! Each lit pixel becomes a `scale`-sized square. Covers the characters the
//! HUD needs: A-Z, 0-9, ':', '!' and space. Lowercase renders as uppercase;
//! anything else advances without drawing.

use glam::Vec2;

use super::shapes::rect;
use super::vertex::Vertex;

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance per character, including one column of spacing
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Rows top to bottom; bit 4 is the leftmost column
type Glyph = [u8; GLYPH_HEIGHT as usize];

fn glyph(c: char) -> Option<Glyph> {
    let rows = match c.to_ascii_uppercase() {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        ' ' => [0x00; GLYPH_HEIGHT as usize],
        _ => return None,
    };
    Some(rows)
}

/// Lit pixel coordinates of a glyph, in font units
fn pixels(glyph: Glyph) -> impl Iterator<Item = (u32, u32)> {
    (0..GLYPH_HEIGHT).flat_map(move |row| {
        (0..GLYPH_WIDTH)
            .filter(move |&col| glyph[row as usize] & (0x10 >> col) != 0)
            .map(move |col| (col, row))
    })
}

/// Size of `text` on screen. No trailing spacing column.
pub fn measure(text: &str, scale: f32) -> Vec2 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return Vec2::ZERO;
    }
    let width = chars * GLYPH_ADVANCE - 1;
    Vec2::new(width as f32, GLYPH_HEIGHT as f32) * scale
}

/// Generate vertices for `text` with its top-left corner at `pos`
pub fn text(text: &str, pos: Vec2, scale: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let pixel = Vec2::splat(scale);
    for (i, c) in text.chars().enumerate() {
        let Some(glyph) = glyph(c) else { continue };
        let origin = pos + Vec2::new((i as u32 * GLYPH_ADVANCE) as f32 * scale, 0.0);
        for (col, row) in pixels(glyph) {
            let offset = Vec2::new(col as f32, row as f32) * scale;
            vertices.extend(rect(origin + offset, pixel, color));
        }
    }
    vertices
}

/// Generate vertices for `text` centred on `center`
pub fn text_centered(s: &str, center: Vec2, scale: f32, color: [f32; 4]) -> Vec<Vertex> {
    text(s, center - measure(s, scale) / 2.0, scale, color)
}
