//! Toy robot simulator.
//!
//! A robot moves on a bounded square table, driven by a text command stream
//! (`PLACE X,Y,F`, `MOVE`, `LEFT`, `RIGHT`, `REPORT`). The architecture keeps
//! a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (grammar, board, robot state
//!   machine). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting inputs (configuration file, line sources).
//!
//! [`simulate`] wires the two together into the run loop used by the binary.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod simulate;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
