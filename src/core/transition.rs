//! Prioritized, guarded edges between states.

use super::guard::Guard;
use std::fmt;

/// One candidate edge out of a state.
///
/// A transition is an immutable (guard, target, priority) tuple. The target
/// is the *name* of a state registered on the same machine; the machine
/// validates names at build time and resolves them to indices while loading.
/// Higher priorities are evaluated first; among equal priorities, the
/// transition registered first wins.
///
/// # Example
///
/// ```rust
/// use framestate::{Guard, Transition};
///
/// struct Player {
///     speed: f32,
/// }
///
/// let transition = Transition::new(Guard::new(|p: &Player| p.speed > 0.0), "Running", 10);
///
/// assert_eq!(transition.target(), "Running");
/// assert_eq!(transition.priority(), 10);
/// assert!(transition.fires(&Player { speed: 2.0 }));
/// assert!(!transition.fires(&Player { speed: 0.0 }));
/// ```
pub struct Transition<A> {
    guard: Guard<A>,
    target: String,
    priority: i32,
}

impl<A> Transition<A> {
    /// Create a transition toward the named target state.
    pub fn new(guard: Guard<A>, target: impl Into<String>, priority: i32) -> Self {
        Transition {
            guard,
            target: target.into(),
            priority,
        }
    }

    /// Name of the target state.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Evaluation priority. Higher fires first; equal priorities keep
    /// registration order.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Evaluate the guard against the actor.
    ///
    /// Pure; called every tick the owning state is active.
    pub fn fires(&self, actor: &A) -> bool {
        self.guard.check(actor)
    }
}

impl<A> fmt::Debug for Transition<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("target", &self.target)
            .field("priority", &self.priority)
            .finish()
    }
}
