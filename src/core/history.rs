//! State change history tracking.
//!
//! Every successful state change is recorded by name with a timestamp and
//! the frame tick it happened on. Records are what listeners receive and
//! what snapshots persist; the states themselves hold closures and are not
//! serializable, so history is tracked purely by name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state change.
///
/// The initial entry into the default state has `from == None`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Name of the state exited, if any.
    pub from: Option<String>,
    /// Name of the state entered.
    pub to: String,
    /// Wall-clock time of the change.
    pub timestamp: DateTime<Utc>,
    /// Value of the machine's tick counter when the change happened.
    pub tick: u64,
}

/// Ordered log of every state change a machine has made.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use framestate::{TransitionLog, TransitionRecord};
///
/// let mut log = TransitionLog::new();
/// log.record(TransitionRecord {
///     from: None,
///     to: "Idle".into(),
///     timestamp: Utc::now(),
///     tick: 0,
/// });
/// log.record(TransitionRecord {
///     from: Some("Idle".into()),
///     to: "Running".into(),
///     timestamp: Utc::now(),
///     tick: 3,
/// });
///
/// assert_eq!(log.path(), vec!["Idle", "Running"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionLog {
    records: Vec<TransitionRecord>,
}

impl TransitionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        TransitionLog {
            records: Vec::new(),
        }
    }

    /// Append a record.
    pub fn record(&mut self, record: TransitionRecord) {
        self.records.push(record);
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// Number of recorded changes.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether any change has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The sequence of state names visited, in order.
    ///
    /// The `from` of the first record is included when present, so a log
    /// started by the machine (whose first record has no `from`) yields
    /// exactly the entered states.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            if let Some(from) = &first.from {
                path.push(from.as_str());
            }
        }
        for record in &self.records {
            path.push(record.to.as_str());
        }
        path
    }

    /// Elapsed time between the first and last recorded change, or `None`
    /// for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
