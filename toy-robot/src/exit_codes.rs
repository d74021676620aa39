//! Stable exit codes for the simulator binary.

/// Input was exhausted without a fatal error.
pub const OK: i32 = 0;
/// Reading input, writing output, or loading config failed.
pub const FAILURE: i32 = 1;
