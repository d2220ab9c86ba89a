//! Snapshot error types.

use thiserror::Error;

/// Errors that can occur when encoding, decoding, or restoring snapshots.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot format version is not supported by this build
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Snapshot names a state the machine does not have
    #[error("Snapshot references unknown state '{0}'")]
    UnknownState(String),

    /// Restore attempted on a machine that has not been set up
    #[error("Machine is not loaded; set_up must run before restore")]
    MachineNotLoaded,
}
