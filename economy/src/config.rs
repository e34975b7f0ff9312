//! Starting-cash configuration binding
//!
//! One integer key feeds the treasury. Syntax and type errors are the
//! parser's to reject; nothing here validates config text. A multi-resource
//! split (gold/wood/...) has been floated but is not supported.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EconomyError, Result};
use crate::treasury::Treasury;

/// Starting cash for players without an explicit override.
pub const DEFAULT_STARTING_CASH: u64 = 10_000;

/// The `[economy]` table of a skirmish config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EconomyConfig {
    /// Cash each player opens the match with.
    #[serde(default = "default_starting_cash")]
    pub starting_cash: u64,
}

fn default_starting_cash() -> u64 {
    DEFAULT_STARTING_CASH
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            starting_cash: DEFAULT_STARTING_CASH,
        }
    }
}

impl EconomyConfig {
    /// Parse from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| EconomyError::ConfigParse(e.to_string()))
    }

    /// Read and parse a TOML config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Initialize `treasury` from this config.
    pub fn init_treasury(&self, treasury: &mut Treasury) {
        log::info!(
            "player {:?} opens with {} starting cash",
            treasury.owner(),
            self.starting_cash
        );
        treasury.set_starting_cash(self.starting_cash);
    }
}
