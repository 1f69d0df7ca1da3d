use serde::{Deserialize, Serialize};

/// A single glyph with its placement in document coordinate space.
///
/// The document layer guarantees left-to-right, top-to-bottom reading
/// order; positions and widths share one unit system. Consumed as-is, no
/// assumptions beyond ordering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionedChar {
    pub glyph: char,
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

impl PositionedChar {
    pub fn new(glyph: char, x: f64, y: f64, width: f64) -> Self {
        Self { glyph, x, y, width }
    }
}
