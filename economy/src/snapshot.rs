//! Versioned save/replay snapshot of a treasury
//!
//! Only the balance is persisted. The income window is rebuilt from live
//! play after a load, so the rolling estimate under-reports until the window
//! refills.

use serde::{Deserialize, Serialize};
use sha3::Sha3_256;

use crate::error::{EconomyError, Result};
use crate::treasury::Treasury;

/// Newest snapshot layout this build can read, and the one it writes.
pub const TREASURY_SNAPSHOT_VERSION: u32 = 1;

/// Persisted treasury state.
///
/// The version tag leads the payload so future fields can be appended behind
/// it; anything added after version 1 must carry `#[serde(default)]` so
/// older saves keep reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasurySnapshot {
    pub version: u32,
    pub cash: u64,
}

impl Treasury {
    /// Capture the persisted subset of this treasury's state.
    pub fn snapshot(&self) -> TreasurySnapshot {
        TreasurySnapshot {
            version: TREASURY_SNAPSHOT_VERSION,
            cash: self.balance(),
        }
    }

    /// Load `snapshot` into this treasury.
    ///
    /// A version newer than this build knows is refused outright; the layout
    /// has no defined meaning beyond its known versions. Restoring goes
    /// through the same reset as a match start, so the income window, its
    /// cursor, and the frame timestamp all come back empty.
    pub fn restore(&mut self, snapshot: &TreasurySnapshot) -> Result<()> {
        if snapshot.version > TREASURY_SNAPSHOT_VERSION {
            return Err(EconomyError::UnsupportedSnapshotVersion {
                found: snapshot.version,
                supported: TREASURY_SNAPSHOT_VERSION,
            });
        }

        log::debug!(
            "restoring treasury snapshot v{} for player {:?}",
            snapshot.version,
            self.owner()
        );
        self.set_starting_cash(snapshot.cash);
        Ok(())
    }

    /// Replay-consistency hook.
    ///
    /// The treasury contributes nothing to the lockstep digest: cash is
    /// allowed to diverge across consistency checks without flagging a
    /// desync. Intentional no-op, not a missing implementation.
    pub fn replay_crc(&self, _hasher: &mut Sha3_256) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::treasury::PlayerId;
    use sha3::Digest;

    #[test]
    fn round_trip_restores_balance_and_empties_the_window() {
        let mut treasury = Treasury::new(PlayerId(1));
        treasury.set_starting_cash(1_000);
        treasury.deposit(600, true, &mut ());
        treasury.withdraw(250, true, &mut ());
        let balance = treasury.balance();
        assert!(treasury.cash_per_minute() > 0);

        let snapshot = treasury.snapshot();
        let mut loaded = Treasury::new(PlayerId(1));
        loaded.deposit(9_999, true, &mut ());
        loaded.restore(&snapshot).unwrap();

        assert_eq!(loaded.balance(), balance);
        assert_eq!(loaded.cash_per_minute(), 0);
        assert_eq!(loaded.last_update_frame(), 0);
    }

    #[test]
    fn future_version_is_a_hard_failure() {
        let snapshot = TreasurySnapshot {
            version: TREASURY_SNAPSHOT_VERSION + 1,
            cash: 42,
        };

        let mut treasury = Treasury::new(PlayerId(0));
        treasury.set_starting_cash(7);

        let err = treasury.restore(&snapshot).unwrap_err();
        assert!(matches!(
            err,
            EconomyError::UnsupportedSnapshotVersion { found, .. } if found == 2
        ));
        // The failed load left the treasury untouched.
        assert_eq!(treasury.balance(), 7);
    }

    #[test]
    fn version_one_payload_reads_as_written() {
        let json = r#"{"version":1,"cash":123456}"#;
        let snapshot: TreasurySnapshot = serde_json::from_str(json).unwrap();

        let mut treasury = Treasury::new(PlayerId(0));
        treasury.restore(&snapshot).unwrap();
        assert_eq!(treasury.balance(), 123_456);
    }

    #[test]
    fn replay_crc_leaves_the_digest_untouched() {
        let mut treasury = Treasury::new(PlayerId(0));
        treasury.set_starting_cash(555);

        let mut hashed = Sha3_256::new();
        hashed.update(b"frame 100");
        treasury.replay_crc(&mut hashed);

        let mut reference = Sha3_256::new();
        reference.update(b"frame 100");

        assert_eq!(hashed.finalize(), reference.finalize());
    }
}
