//! Deterministic, pure logic for the simulator.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests.

pub mod board;
pub mod command;
pub mod direction;
pub mod robot;
