//! Named states owning their transitions and lifecycle hooks.

use super::guard::Guard;
use super::hooks::{Hooks, TickPhase};
use super::transition::Transition;
use std::cmp::Reverse;
use std::fmt;

/// A named node in the machine: an ordered list of outgoing transitions plus
/// optional lifecycle hooks.
///
/// States are configured values, built fluently and handed to the machine
/// builder. The name is the state's identity — transitions target states by
/// name, and the machine requires names to be unique.
///
/// Hook slots left unset are permanent no-ops; a state that only cares about
/// `on_enter` fills just that slot.
///
/// # Example
///
/// ```rust
/// use framestate::State;
///
/// struct Player {
///     speed: f32,
/// }
///
/// let idle = State::new("Idle")
///     .on_enter(|p: &mut Player| p.speed = 0.0)
///     .when("Running", |p: &Player| p.speed > 0.0);
///
/// assert_eq!(idle.name(), "Idle");
/// assert_eq!(idle.transitions().len(), 1);
/// ```
pub struct State<A> {
    name: String,
    hooks: Hooks<A>,
    transitions: Vec<Transition<A>>,
}

impl<A> State<A> {
    /// Create a state with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        State {
            name: name.into(),
            hooks: Hooks::default(),
            transitions: Vec::new(),
        }
    }

    /// The state's name. Stable for the lifetime of the machine.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The outgoing transitions, in registration order until the machine
    /// sorts them during loading.
    pub fn transitions(&self) -> &[Transition<A>] {
        &self.transitions
    }

    /// Set the hook run once per load cycle, before any state is entered.
    pub fn on_load<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut A) + Send + 'static,
    {
        self.hooks.on_load = Some(Box::new(hook));
        self
    }

    /// Set the hook run every time this state becomes active.
    pub fn on_enter<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut A) + Send + 'static,
    {
        self.hooks.on_enter = Some(Box::new(hook));
        self
    }

    /// Set the hook run every time this state stops being active.
    pub fn on_exit<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut A) + Send + 'static,
    {
        self.hooks.on_exit = Some(Box::new(hook));
        self
    }

    /// Set the hook run once per main-update tick while active.
    pub fn tick<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut A) + Send + 'static,
    {
        self.hooks.tick = Some(Box::new(hook));
        self
    }

    /// Set the hook run once per post-update tick while active.
    pub fn late_tick<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut A) + Send + 'static,
    {
        self.hooks.late_tick = Some(Box::new(hook));
        self
    }

    /// Set the hook run once per fixed-timestep tick while active.
    pub fn fixed_tick<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut A) + Send + 'static,
    {
        self.hooks.fixed_tick = Some(Box::new(hook));
        self
    }

    /// Add a priority-0 transition to the named target.
    ///
    /// Shorthand for [`transition`](State::transition) with priority 0.
    pub fn when<F>(self, target: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&A) -> bool + Send + Sync + 'static,
    {
        self.transition(target, 0, predicate)
    }

    /// Add a transition to the named target with an explicit priority.
    ///
    /// Higher priorities are evaluated first; equal priorities keep
    /// registration order. Duplicate targets are permitted.
    pub fn transition<F>(mut self, target: impl Into<String>, priority: i32, predicate: F) -> Self
    where
        F: Fn(&A) -> bool + Send + Sync + 'static,
    {
        self.transitions
            .push(Transition::new(Guard::new(predicate), target, priority));
        self
    }

    /// Append a pre-built transition.
    pub fn add_transition(&mut self, transition: Transition<A>) {
        self.transitions.push(transition);
    }

    /// Re-order transitions by descending priority.
    ///
    /// The sort is stable, so equal priorities keep their registration order.
    /// The machine calls this once per load cycle, after all registrations
    /// and before any tick.
    pub fn sort_transitions(&mut self) {
        self.transitions.sort_by_key(|t| Reverse(t.priority()));
    }

    pub(crate) fn load(&mut self, actor: &mut A) {
        self.hooks.run_load(actor);
    }

    pub(crate) fn enter(&mut self, actor: &mut A) {
        self.hooks.run_enter(actor);
    }

    pub(crate) fn exit(&mut self, actor: &mut A) {
        self.hooks.run_exit(actor);
    }

    pub(crate) fn run_phase(&mut self, phase: TickPhase, actor: &mut A) {
        self.hooks.run_phase(phase, actor);
    }
}

impl<A> fmt::Debug for State<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("name", &self.name)
            .field("transitions", &self.transitions)
            .finish()
    }
}
