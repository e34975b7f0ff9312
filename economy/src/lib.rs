//! Warchest economy core
//!
//! Per-player treasury for a deterministic, frame-stepped lockstep
//! simulation: a cash balance under clamped withdraw/deposit, a rolling
//! one-minute income estimate kept in a ring of per-second slots, a
//! versioned save snapshot, and the starting-cash config binding.

pub mod audio;
pub mod config;
pub mod error;
pub mod income_window;
pub mod snapshot;
pub mod treasury;

// Re-export main types
pub use audio::{AudioCue, AudioEvent, TransactionSounds};
pub use config::{EconomyConfig, DEFAULT_STARTING_CASH};
pub use error::{EconomyError, Result};
pub use income_window::IncomeWindow;
pub use snapshot::{TreasurySnapshot, TREASURY_SNAPSHOT_VERSION};
pub use treasury::{EconomyEvents, PlayerId, Treasury, FRAMES_PER_SECOND, INCOME_WINDOW_SECS};
