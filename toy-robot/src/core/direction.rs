//! Compass directions and grid positions.

use std::fmt;
use std::str::FromStr;

/// Facing of the robot, in clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, clockwise starting from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Rotate 90 degrees counter-clockwise.
    pub fn left(self) -> Self {
        self.rotate(3)
    }

    /// Rotate 90 degrees clockwise.
    pub fn right(self) -> Self {
        self.rotate(1)
    }

    /// Unit offset `(dx, dy)` of one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
        }
    }

    fn rotate(self, quarter_turns: usize) -> Self {
        Self::ALL[(self.index() + quarter_turns) % 4]
    }

    fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a word does not name a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDirection;

impl FromStr for Direction {
    type Err = UnknownDirection;

    /// Case-insensitive match against `NORTH`, `EAST`, `SOUTH`, `WEST`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.as_str().eq_ignore_ascii_case(s))
            .ok_or(UnknownDirection)
    }
}

/// Integer grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step towards `facing`.
    ///
    /// Returns `None` only when the step would overflow `i32`.
    pub fn step(self, facing: Direction) -> Option<Self> {
        let (dx, dy) = facing.delta();
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_and_right_follow_the_compass() {
        assert_eq!(Direction::North.left(), Direction::West);
        assert_eq!(Direction::West.left(), Direction::South);
        assert_eq!(Direction::North.right(), Direction::East);
        assert_eq!(Direction::West.right(), Direction::North);
    }

    #[test]
    fn four_turns_restore_the_original_facing() {
        for dir in Direction::ALL {
            assert_eq!(dir.left().left().left().left(), dir);
            assert_eq!(dir.right().right().right().right(), dir);
            assert_eq!(dir.left().right(), dir);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("north".parse::<Direction>(), Ok(Direction::North));
        assert_eq!("SoUtH".parse::<Direction>(), Ok(Direction::South));
        assert_eq!("EAST".parse::<Direction>(), Ok(Direction::East));
        assert_eq!("west".parse::<Direction>(), Ok(Direction::West));
    }

    #[test]
    fn parse_rejects_unknown_words() {
        assert_eq!("UP".parse::<Direction>(), Err(UnknownDirection));
        assert_eq!("N".parse::<Direction>(), Err(UnknownDirection));
        assert_eq!("".parse::<Direction>(), Err(UnknownDirection));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for dir in Direction::ALL {
            assert_eq!(dir.to_string().parse::<Direction>(), Ok(dir));
        }
    }

    #[test]
    fn step_moves_one_unit() {
        let origin = Position::new(2, 2);
        assert_eq!(origin.step(Direction::North), Some(Position::new(2, 3)));
        assert_eq!(origin.step(Direction::South), Some(Position::new(2, 1)));
        assert_eq!(origin.step(Direction::East), Some(Position::new(3, 2)));
        assert_eq!(origin.step(Direction::West), Some(Position::new(1, 2)));
    }

    #[test]
    fn step_reports_overflow() {
        assert_eq!(Position::new(i32::MAX, 0).step(Direction::East), None);
        assert_eq!(Position::new(0, i32::MIN).step(Direction::South), None);
    }
}
