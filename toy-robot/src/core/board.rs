//! Fixed grid bounds the robot moves on.

use thiserror::Error;

/// Width and height of the reference table.
pub const DEFAULT_SIZE: u32 = 5;

/// Errors raised when constructing a [`Board`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board {axis} must be > 0")]
    Empty { axis: &'static str },

    #[error("board {axis} must be <= {max} (got {value})")]
    TooLarge {
        axis: &'static str,
        value: u32,
        max: u32,
    },
}

/// Rectangular grid with its origin at (0, 0).
///
/// Valid coordinates satisfy `0 <= x < width` and `0 <= y < height`. A board
/// never changes after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    width: u32,
    height: u32,
}

impl Board {
    pub fn new(width: u32, height: u32) -> Result<Self, BoardError> {
        check_axis("width", width)?;
        check_axis("height", height)?;
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns true if `(x, y)` lies on the board.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        within(x, self.width) && within(y, self.height)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
        }
    }
}

fn check_axis(axis: &'static str, value: u32) -> Result<(), BoardError> {
    if value == 0 {
        return Err(BoardError::Empty { axis });
    }
    // Coordinates are `i32`; every cell must stay addressable.
    let max = i32::MAX as u32;
    if value > max {
        return Err(BoardError::TooLarge { axis, value, max });
    }
    Ok(())
}

fn within(coord: i32, limit: u32) -> bool {
    u32::try_from(coord).is_ok_and(|c| c < limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_is_five_by_five() {
        let board = Board::default();
        assert_eq!((board.width(), board.height()), (5, 5));
    }

    #[test]
    fn contains_accepts_every_cell_and_rejects_the_rim() {
        let board = Board::new(3, 4).expect("board");
        for x in -2..6 {
            for y in -2..7 {
                let expected = (0..3).contains(&x) && (0..4).contains(&y);
                assert_eq!(board.contains(x, y), expected, "({x}, {y})");
            }
        }
    }

    #[test]
    fn contains_handles_extreme_coordinates() {
        let board = Board::default();
        assert!(!board.contains(i32::MIN, 0));
        assert!(!board.contains(0, i32::MAX));
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert_eq!(
            Board::new(0, 5).expect_err("zero width"),
            BoardError::Empty { axis: "width" }
        );
        assert_eq!(
            Board::new(5, 0).expect_err("zero height"),
            BoardError::Empty { axis: "height" }
        );
    }

    #[test]
    fn new_rejects_dimensions_beyond_coordinate_range() {
        let err = Board::new(5, u32::MAX).expect_err("too tall");
        assert!(err.to_string().contains("height must be <="));
    }
}
