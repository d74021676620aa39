//! Simulator configuration loaded from an optional TOML file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::board::{Board, DEFAULT_SIZE};

/// Simulator configuration (TOML).
///
/// Missing fields default to the reference 5x5 table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SimulatorConfig {
    pub board: BoardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BoardConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
        }
    }
}

impl SimulatorConfig {
    pub fn validate(&self) -> Result<()> {
        self.board()?;
        Ok(())
    }

    /// Build the table described by `[board]`.
    pub fn board(&self) -> Result<Board> {
        Board::new(self.board.width, self.board.height).context("invalid [board] section")
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SimulatorConfig::default()`.
pub fn load_config(path: &Path) -> Result<SimulatorConfig> {
    if !path.exists() {
        return Ok(SimulatorConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg = parse_config(&contents).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

fn parse_config(contents: &str) -> Result<SimulatorConfig> {
    let cfg: SimulatorConfig = toml::from_str(contents)?;
    cfg.validate()?;
    Ok(cfg)
}
