//! Warchest save-slot storage
//!
//! Directory-backed persistence for treasury snapshots:
//! - Each save slot is written twice: pretty JSON (inspectable) and bincode
//!   (fast to load)
//! - Loads prefer the bincode file and fall back to JSON
//! - Slots are named by the caller; one directory per campaign/profile

use economy::TreasurySnapshot;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("save slot not found: {0}")]
    SlotNotFound(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// File-based store for named save slots
pub struct SaveStore {
    save_dir: PathBuf,
}

impl SaveStore {
    /// Open (creating if needed) a save directory
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let save_dir = path.as_ref().to_path_buf();

        if !save_dir.exists() {
            fs::create_dir_all(&save_dir)?;
        }

        Ok(Self { save_dir })
    }

    /// Write `data` into `slot` as both JSON and bincode
    pub fn save_slot<T: Serialize>(&self, slot: &str, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        fs::write(self.json_path(slot), json)?;

        let bin = bincode::serialize(data)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        fs::write(self.bin_path(slot), bin)?;

        Ok(())
    }

    /// Load `slot`, bincode first with a JSON fallback
    pub fn load_slot<T: for<'de> Deserialize<'de>>(&self, slot: &str) -> Result<T> {
        let bin_path = self.bin_path(slot);
        if bin_path.exists() {
            let data = fs::read(&bin_path)?;
            return bincode::deserialize(&data)
                .map_err(|e| StorageError::Serialization(e.to_string()));
        }

        let json_path = self.json_path(slot);
        if json_path.exists() {
            let data = fs::read_to_string(&json_path)?;
            return serde_json::from_str(&data)
                .map_err(|e| StorageError::Serialization(e.to_string()));
        }

        Err(StorageError::SlotNotFound(slot.to_string()))
    }

    /// Write a treasury snapshot into `slot`
    pub fn save_treasury(&self, slot: &str, snapshot: &TreasurySnapshot) -> Result<()> {
        self.save_slot(slot, snapshot)
    }

    /// Load a treasury snapshot from `slot`
    ///
    /// The snapshot's version is not checked here; `Treasury::restore`
    /// refuses layouts newer than the running build.
    pub fn load_treasury(&self, slot: &str) -> Result<TreasurySnapshot> {
        self.load_slot(slot)
    }

    /// Check if a slot exists in either format
    pub fn has_slot(&self, slot: &str) -> bool {
        self.bin_path(slot).exists() || self.json_path(slot).exists()
    }

    /// List all slot names present in the save directory
    pub fn list_slots(&self) -> Result<Vec<String>> {
        let mut slots = Vec::new();

        for entry in fs::read_dir(&self.save_dir)? {
            let entry = entry?;
            if let Some(name) = entry.path().file_stem().and_then(|n| n.to_str()) {
                if !slots.iter().any(|s| s == name) {
                    slots.push(name.to_string());
                }
            }
        }

        slots.sort();
        Ok(slots)
    }

    /// Delete a slot's files, if present
    pub fn delete_slot(&self, slot: &str) -> Result<()> {
        let bin_path = self.bin_path(slot);
        if bin_path.exists() {
            fs::remove_file(bin_path)?;
        }
        let json_path = self.json_path(slot);
        if json_path.exists() {
            fs::remove_file(json_path)?;
        }

        Ok(())
    }

    /// Save directory path
    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    fn bin_path(&self, slot: &str) -> PathBuf {
        self.save_dir.join(format!("{}.bin", slot))
    }

    fn json_path(&self, slot: &str) -> PathBuf {
        self.save_dir.join(format!("{}.json", slot))
    }
}
