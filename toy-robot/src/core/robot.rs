//! Robot state machine and command dispatch.
//!
//! A robot starts unplaced and ignores everything except a `PLACE` that lands
//! on the board. Once placed it can move, turn, and report. [`Board::contains`]
//! is the only legality check, applied at the point of mutation for both
//! `PLACE` and `MOVE`; an illegal request is a no-op, never an error.

use std::fmt;

use tracing::trace;

use crate::core::board::Board;
use crate::core::command::Command;
use crate::core::direction::{Direction, Position};

/// Where the robot stands and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub position: Position,
    pub facing: Direction,
}

/// Snapshot emitted by `REPORT`, formatted as `X,Y,F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub x: i32,
    pub y: i32,
    pub facing: Direction,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.facing)
    }
}

impl From<Placement> for Report {
    fn from(placement: Placement) -> Self {
        Self {
            x: placement.position.x,
            y: placement.position.y,
            facing: placement.facing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Robot {
    board: Board,
    /// `None` until the first successful `PLACE`.
    placement: Option<Placement>,
}

impl Robot {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            placement: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// Apply one command. Returns a [`Report`] only for `REPORT` while placed.
    pub fn apply(&mut self, command: Command) -> Option<Report> {
        match command {
            Command::Place { x, y, facing } => {
                self.place(Position::new(x, y), facing);
                None
            }
            Command::Move => {
                self.advance();
                None
            }
            Command::Left => {
                self.turn(Direction::left);
                None
            }
            Command::Right => {
                self.turn(Direction::right);
                None
            }
            Command::Report => self.report(),
        }
    }

    /// Put the robot at `position`. Returns false (and changes nothing) when
    /// the position is off the board.
    pub fn place(&mut self, position: Position, facing: Direction) -> bool {
        if !self.board.contains(position.x, position.y) {
            trace!(x = position.x, y = position.y, "ignoring PLACE off the board");
            return false;
        }
        self.placement = Some(Placement { position, facing });
        true
    }

    /// Step one unit forward. Returns false when unplaced or when the step
    /// would leave the board.
    pub fn advance(&mut self) -> bool {
        let Some(placement) = self.placement.as_mut() else {
            trace!("ignoring MOVE before PLACE");
            return false;
        };
        match placement.position.step(placement.facing) {
            Some(next) if self.board.contains(next.x, next.y) => {
                placement.position = next;
                true
            }
            _ => {
                trace!(facing = %placement.facing, "ignoring MOVE off the board");
                false
            }
        }
    }

    pub fn report(&self) -> Option<Report> {
        self.placement.map(Report::from)
    }

    fn turn(&mut self, rotate: fn(Direction) -> Direction) {
        match self.placement.as_mut() {
            Some(placement) => placement.facing = rotate(placement.facing),
            None => trace!("ignoring turn before PLACE"),
        };
    }
}
