//! Save store port - the engine's narrow persistence contract
//!
//! The engine treats storage as a synchronous collaborator that may fail;
//! every failure is logged and swallowed at the call site, because the
//! in-memory session is the source of truth and is never rolled back over
//! a failed write.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use riftbound_domain::{Ability, CombinedAbility, Dimension};

/// The minimal snapshot persisted to resume progress
///
/// Phase, player positions, and interactive objects are deliberately not
/// part of the record: a loaded session re-enters its level through
/// `start_game`, which rebuilds the object set. The combined-ability set is
/// stored as a convenience snapshot but is never authoritative - the engine
/// recomputes it from the collected kinds after every load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecord {
    pub current_level: u32,
    pub current_dimension: Dimension,
    pub abilities: Vec<Ability>,
    pub combined_abilities: BTreeSet<CombinedAbility>,
    /// Write timestamp; defaulted on deserialize so records from before
    /// this field existed still load
    #[serde(default = "Utc::now")]
    pub saved_at: DateTime<Utc>,
}

/// Failures a save store can surface
#[derive(Debug, Error)]
pub enum SaveStoreError {
    #[error("Failed to encode save record: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Save storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Save storage unavailable: {0}")]
    Unavailable(String),
}

/// Port for the single-slot save blob store
///
/// `load` is all-or-nothing: either a complete record or nothing, never a
/// partially-applied one.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait SaveStorePort {
    /// Write the record to the slot, replacing whatever was there
    fn save(&mut self, record: &SaveRecord) -> Result<(), SaveStoreError>;

    /// Read the slot; `None` when no save exists
    fn load(&self) -> Result<Option<SaveRecord>, SaveStoreError>;

    /// Remove the slot; clearing an empty slot is not an error
    fn clear(&mut self) -> Result<(), SaveStoreError>;
}
