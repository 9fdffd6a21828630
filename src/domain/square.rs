//! Pure board domain types and utilities.
//! No GPUI dependencies - this is the domain layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A board square in normalized (row, col) space, 0-indexed.
///
/// The engine service serializes coordinates as `(col, row)` tuples; the
/// codec swaps them into this convention on decode. Orientation (whose side
/// faces the viewer) is not part of this type - see `Perspective`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Square {
    pub row: u32,
    pub col: u32,
}

impl Square {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Whether this square lies within a `width` x `height` board.
    pub const fn in_bounds(&self, width: u32, height: u32) -> bool {
        self.row < height && self.col < width
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A side of the game; doubles as the viewing orientation for rendering.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        assert!(Square::new(0, 0).in_bounds(8, 8));
        assert!(Square::new(7, 7).in_bounds(8, 8));
        assert!(!Square::new(8, 0).in_bounds(8, 8));
        assert!(!Square::new(0, 8).in_bounds(8, 8));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent(), Color::White);
    }

    #[test]
    fn test_color_serde_names() {
        assert_eq!(serde_json::to_string(&Color::White).unwrap(), "\"White\"");
        let c: Color = serde_json::from_str("\"Black\"").unwrap();
        assert_eq!(c, Color::Black);
    }
}
