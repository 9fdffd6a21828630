//! Perspective transform between normalized and display coordinates.

use crate::domain::snapshot::BoardSnapshot;
use crate::domain::square::{Color, Square};

/// Maps normalized squares to display squares for a given viewer color.
///
/// Viewing as White mirrors the column axis; viewing as Black mirrors the
/// row axis. Each arm is a single-axis mirror, so the transform is its own
/// inverse - `from_display` relies on that.
///
/// Squares must be in bounds for the perspective's dimensions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Perspective {
    pub viewer: Color,
    pub width: u32,
    pub height: u32,
}

impl Perspective {
    pub const fn new(viewer: Color, width: u32, height: u32) -> Self {
        Self {
            viewer,
            width,
            height,
        }
    }

    pub fn for_snapshot(viewer: Color, snapshot: &BoardSnapshot) -> Self {
        Self::new(viewer, snapshot.width(), snapshot.height())
    }

    /// Normalized -> display.
    pub const fn to_display(&self, sq: Square) -> Square {
        match self.viewer {
            Color::White => Square::new(sq.row, self.width - 1 - sq.col),
            Color::Black => Square::new(self.height - 1 - sq.row, sq.col),
        }
    }

    /// Display -> normalized. The mirror is involutive, so this is the same
    /// mapping as `to_display`.
    pub const fn from_display(&self, sq: Square) -> Square {
        self.to_display(sq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_mirrors_column() {
        let p = Perspective::new(Color::White, 8, 8);
        assert_eq!(p.to_display(Square::new(0, 0)), Square::new(0, 7));
        assert_eq!(p.to_display(Square::new(3, 2)), Square::new(3, 5));
    }

    #[test]
    fn test_black_mirrors_row() {
        let p = Perspective::new(Color::Black, 8, 8);
        assert_eq!(p.to_display(Square::new(0, 0)), Square::new(7, 0));
        assert_eq!(p.to_display(Square::new(3, 2)), Square::new(4, 2));
    }

    #[test]
    fn test_involution_all_squares() {
        for viewer in [Color::White, Color::Black] {
            let p = Perspective::new(viewer, 8, 8);
            for row in 0..8 {
                for col in 0..8 {
                    let sq = Square::new(row, col);
                    assert_eq!(p.from_display(p.to_display(sq)), sq);
                    assert_eq!(p.to_display(p.from_display(sq)), sq);
                }
            }
        }
    }

    #[test]
    fn test_non_square_board() {
        let p = Perspective::new(Color::Black, 5, 3);
        let sq = Square::new(2, 4);
        assert_eq!(p.to_display(sq), Square::new(0, 4));
        assert_eq!(p.from_display(p.to_display(sq)), sq);
    }
}
