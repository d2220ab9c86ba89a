//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions over the actor context that determine
//! whether a transition fires. They are re-evaluated every tick the owning
//! state is active, never cached.

/// Pure predicate that determines whether a transition may fire.
///
/// A guard reads the actor context and answers yes or no. It must be pure
/// (deterministic, no side effects): the machine evaluates the active state's
/// guards once per tick, in priority order, and the first one returning
/// `true` selects the next state.
///
/// # Example
///
/// ```rust
/// use framestate::Guard;
///
/// struct Player {
///     speed: f32,
/// }
///
/// let moving = Guard::new(|p: &Player| p.speed > 0.0);
///
/// assert!(!moving.check(&Player { speed: 0.0 }));
/// assert!(moving.check(&Player { speed: 4.5 }));
/// ```
pub struct Guard<A> {
    predicate: Box<dyn Fn(&A) -> bool + Send + Sync>,
}

impl<A> Guard<A> {
    /// Create a guard from a pure predicate over the actor.
    ///
    /// The predicate must be deterministic and thread-safe (`Send + Sync`).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&A) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the predicate against the actor.
    ///
    /// Pure: no side effects, safe to call every tick.
    pub fn check(&self, actor: &A) -> bool {
        (self.predicate)(actor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        health: i32,
        grounded: bool,
    }

    #[test]
    fn guard_reads_actor_fields() {
        let alive = Guard::new(|p: &Probe| p.health > 0);

        assert!(alive.check(&Probe {
            health: 10,
            grounded: true
        }));
        assert!(!alive.check(&Probe {
            health: 0,
            grounded: true
        }));
    }

    #[test]
    fn guard_is_deterministic() {
        let probe = Probe {
            health: 3,
            grounded: false,
        };
        let airborne = Guard::new(|p: &Probe| !p.grounded);

        let first = airborne.check(&probe);
        let second = airborne.check(&probe);

        assert_eq!(first, second);
    }

    #[test]
    fn guard_can_combine_conditions() {
        let can_jump = Guard::new(|p: &Probe| p.grounded && p.health > 0);

        assert!(can_jump.check(&Probe {
            health: 1,
            grounded: true
        }));
        assert!(!can_jump.check(&Probe {
            health: 1,
            grounded: false
        }));
        assert!(!can_jump.check(&Probe {
            health: 0,
            grounded: true
        }));
    }
}
