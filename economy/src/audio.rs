//! Money-transaction audio cues
//!
//! The treasury mixes the final volume (global preference scalar times the
//! cue's authored base volume) and drops the event entirely when the product
//! is not positive. Volume is presentation-only and never feeds back into
//! simulation state, which stays pure integer.

use serde::{Deserialize, Serialize};

use crate::treasury::PlayerId;

/// A named sound with its authored base volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioCue {
    pub name: String,
    pub base_volume: f32,
}

impl AudioCue {
    pub fn new(name: impl Into<String>, base_volume: f32) -> Self {
        Self {
            name: name.into(),
            base_volume,
        }
    }
}

/// The two money-transaction cues plus the player's preference scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSounds {
    pub withdraw: AudioCue,
    pub deposit: AudioCue,
    /// Global "money transaction volume" preference.
    pub preferred_volume: f32,
}

impl Default for TransactionSounds {
    fn default() -> Self {
        Self {
            withdraw: AudioCue::new("MoneyWithdraw", 1.0),
            deposit: AudioCue::new("MoneyDeposit", 1.0),
            preferred_volume: 1.0,
        }
    }
}

impl TransactionSounds {
    /// Mixed withdrawal sound for `player`, or `None` when muted.
    pub fn withdraw_event(&self, player: PlayerId) -> Option<AudioEvent> {
        self.mix(&self.withdraw, player)
    }

    /// Mixed deposit sound for `player`, or `None` when muted.
    pub fn deposit_event(&self, player: PlayerId) -> Option<AudioEvent> {
        self.mix(&self.deposit, player)
    }

    fn mix(&self, cue: &AudioCue, player: PlayerId) -> Option<AudioEvent> {
        let volume = self.preferred_volume * cue.base_volume;
        if volume <= 0.0 {
            return None;
        }
        Some(AudioEvent {
            cue: cue.name.clone(),
            player,
            volume,
        })
    }
}

/// A fully mixed, ready-to-dispatch transaction sound.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioEvent {
    pub cue: String,
    pub player: PlayerId,
    pub volume: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_is_preference_times_base() {
        let sounds = TransactionSounds {
            withdraw: AudioCue::new("MoneyWithdraw", 0.8),
            deposit: AudioCue::new("MoneyDeposit", 0.5),
            preferred_volume: 0.5,
        };

        let event = sounds.withdraw_event(PlayerId(3)).unwrap();
        assert_eq!(event.cue, "MoneyWithdraw");
        assert_eq!(event.player, PlayerId(3));
        assert!((event.volume - 0.4).abs() < 1e-6);
    }

    #[test]
    fn muted_preference_suppresses_the_event() {
        let sounds = TransactionSounds {
            preferred_volume: 0.0,
            ..TransactionSounds::default()
        };

        assert!(sounds.withdraw_event(PlayerId(0)).is_none());
        assert!(sounds.deposit_event(PlayerId(0)).is_none());
    }

    #[test]
    fn non_positive_base_volume_suppresses_the_event() {
        let sounds = TransactionSounds {
            deposit: AudioCue::new("MoneyDeposit", -1.0),
            ..TransactionSounds::default()
        };

        assert!(sounds.deposit_event(PlayerId(1)).is_none());
    }
}
