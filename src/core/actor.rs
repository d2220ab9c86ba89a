//! Actor context trait.
//!
//! The machine treats the actor it controls as opaque data: guards read it,
//! hooks mutate it, and the core itself only ever asks it for a display name
//! when writing diagnostics.

/// Context object representing the entity a state machine controls.
///
/// The core places no structural requirement on the actor beyond a display
/// name for logging, and the default implementation supplies even that, so a
/// plain struct opts in with an empty impl.
///
/// # Example
///
/// ```rust
/// use framestate::Actor;
///
/// struct Player {
///     speed: f32,
/// }
///
/// impl Actor for Player {
///     fn name(&self) -> &str {
///         "player"
///     }
/// }
///
/// let player = Player { speed: 0.0 };
/// assert_eq!(player.name(), "player");
/// assert_eq!(player.speed, 0.0);
/// ```
pub trait Actor {
    /// Display name used in diagnostics.
    ///
    /// Default implementation returns `"actor"`.
    fn name(&self) -> &str {
        "actor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unnamed;

    impl Actor for Unnamed {}

    struct Named;

    impl Actor for Named {
        fn name(&self) -> &str {
            "scout"
        }
    }

    #[test]
    fn default_name_is_actor() {
        assert_eq!(Unnamed.name(), "actor");
    }

    #[test]
    fn name_can_be_overridden() {
        assert_eq!(Named.name(), "scout");
    }
}
