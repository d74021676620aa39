//! I/O helpers: configuration and line sources.

pub mod config;
pub mod line_source;
