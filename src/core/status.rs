//! Machine lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The machine's own top-level lifecycle stage, distinct from which state is
/// currently active.
///
/// Legal progression is `Off → Loading → Ready → (On ↔ Paused)`; stopping
/// resets any non-Off status to `Off`, after which the machine must be set up
/// again before reuse. Ticking is only live while `On`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Initial and terminal stage. No ticking, no loading.
    Off,
    /// Transient stage while states are being loaded and sorted.
    Loading,
    /// Loaded but not yet ticking.
    Ready,
    /// Actively ticking and transitioning.
    On,
    /// Ticking suspended; the active state is retained.
    Paused,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Off => "Off",
            Status::Loading => "Loading",
            Status::Ready => "Ready",
            Status::On => "On",
            Status::Paused => "Paused",
        };
        f.write_str(label)
    }
}
