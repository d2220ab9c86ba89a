//! Snapshot and restore for state machines.
//!
//! A snapshot is a serializable picture of where a machine is: its status,
//! active state name, tick count, and change history. Hooks and guards are
//! closures and are NOT captured — restoring requires an identically
//! configured machine, which then picks up from the recorded position.

use crate::core::{Status, TransitionLog};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable picture of a machine's position.
///
/// Produced by [`StateMachine::snapshot`](crate::StateMachine::snapshot) and
/// consumed by [`StateMachine::restore`](crate::StateMachine::restore).
/// Round-trips through JSON for inspection and bincode for compact storage.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version.
    pub version: u32,

    /// Identity of the machine that produced this snapshot.
    pub machine_id: Uuid,

    /// When the snapshot was taken.
    pub timestamp: DateTime<Utc>,

    /// The machine's status at capture time. Informational: restore does
    /// not replay it.
    pub status: Status,

    /// Name of the active state, if any.
    pub current_state: Option<String>,

    /// Main-update tick count at capture time.
    pub ticks: u64,

    /// Complete change history.
    pub history: TransitionLog,
}

impl Snapshot {
    /// Encode as pretty JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON, checking the format version.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate_version()?;
        Ok(snapshot)
    }

    /// Encode as compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from binary, checking the format version.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate_version()?;
        Ok(snapshot)
    }

    fn validate_version(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(())
    }
}
