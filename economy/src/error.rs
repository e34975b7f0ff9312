//! Economy error types

use thiserror::Error;

/// Errors raised by the economy crate
#[derive(Error, Debug)]
pub enum EconomyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid economy config: {0}")]
    ConfigParse(String),

    #[error("unsupported treasury snapshot version {found}, newest supported is {supported}")]
    UnsupportedSnapshotVersion { found: u32, supported: u32 },
}

pub type Result<T> = std::result::Result<T, EconomyError>;
