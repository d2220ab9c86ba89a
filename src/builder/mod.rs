//! Builder API for assembling state machines.
//!
//! States are registered explicitly on the builder together with a required
//! default state, and every structural problem — duplicate names, transitions
//! to nowhere, a missing or unknown default — is caught at
//! [`build`](MachineBuilder::build) time rather than at runtime.

pub mod error;

pub use error::BuildError;

use crate::core::{Actor, State};
use crate::machine::StateMachine;
use std::collections::HashMap;

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use framestate::{Actor, MachineBuilder, State};
///
/// struct Goblin {
///     alerted: bool,
/// }
///
/// impl Actor for Goblin {
///     fn name(&self) -> &str {
///         "goblin"
///     }
/// }
///
/// let machine = MachineBuilder::new()
///     .name("goblin-brain")
///     .state(State::new("Patrol").when("Chase", |g: &Goblin| g.alerted))
///     .state(State::new("Chase").when("Patrol", |g: &Goblin| !g.alerted))
///     .default_state("Patrol")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.default_state(), Some("Patrol"));
/// ```
pub struct MachineBuilder<A> {
    label: String,
    states: Vec<State<A>>,
    default_state: Option<String>,
}

impl<A: Actor> MachineBuilder<A> {
    /// Create a new builder.
    pub fn new() -> Self {
        MachineBuilder {
            label: "state-machine".to_string(),
            states: Vec::new(),
            default_state: None,
        }
    }

    /// Set the diagnostics label used in log messages.
    pub fn name(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Register a state.
    pub fn state(mut self, state: State<A>) -> Self {
        self.states.push(state);
        self
    }

    /// Register multiple states at once.
    pub fn states(mut self, states: Vec<State<A>>) -> Self {
        self.states.extend(states);
        self
    }

    /// Name the default state (required whenever any state is registered).
    ///
    /// The default state doubles as the initial state entered on start and
    /// the fallback the machine returns to after a stop/set_up cycle.
    pub fn default_state(mut self, name: impl Into<String>) -> Self {
        self.default_state = Some(name.into());
        self
    }

    /// Validate the configuration and build the machine.
    ///
    /// A machine with zero states builds successfully and simply idles once
    /// started; everything else is checked here so the machine can trust its
    /// own wiring at runtime.
    pub fn build(self) -> Result<StateMachine<A>, BuildError> {
        let mut by_name = HashMap::with_capacity(self.states.len());
        for (index, state) in self.states.iter().enumerate() {
            if by_name.insert(state.name().to_string(), index).is_some() {
                return Err(BuildError::DuplicateState(state.name().to_string()));
            }
        }

        for state in &self.states {
            for transition in state.transitions() {
                if !by_name.contains_key(transition.target()) {
                    return Err(BuildError::UnknownTarget {
                        from: state.name().to_string(),
                        target: transition.target().to_string(),
                    });
                }
            }
        }

        let default_state = match (&self.default_state, self.states.is_empty()) {
            (Some(name), _) => Some(
                by_name
                    .get(name)
                    .copied()
                    .ok_or_else(|| BuildError::UnknownDefaultState(name.clone()))?,
            ),
            (None, true) => None,
            (None, false) => return Err(BuildError::MissingDefaultState),
        };

        Ok(StateMachine::from_parts(
            self.label,
            self.states,
            by_name,
            default_state,
        ))
    }
}

impl<A: Actor> Default for MachineBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}
