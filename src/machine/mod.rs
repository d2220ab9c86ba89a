//! The state machine that owns the states and drives them each frame.

use crate::core::{Actor, State, Status, TickPhase, TransitionLog, TransitionRecord};
use crate::snapshot::{Snapshot, SnapshotError, SNAPSHOT_VERSION};
use chrono::Utc;
use std::collections::HashMap;
use uuid::Uuid;

/// Callback invoked after every successful state change.
pub type ChangeListener = Box<dyn FnMut(&TransitionRecord) + Send>;

/// A frame-driven state machine bound to one actor.
///
/// The machine owns its states and the actor context. An external driver
/// calls [`set_up`](StateMachine::set_up) once, then [`tick`](StateMachine::tick),
/// [`late_tick`](StateMachine::late_tick), and [`fixed_tick`](StateMachine::fixed_tick)
/// once per corresponding frame phase. Each main-update tick evaluates the
/// active state's transitions in priority order, switches on the first guard
/// that fires, and then runs the (possibly just-entered) state's tick hook —
/// so a freshly entered state always ticks on the frame it was entered.
///
/// The machine has its own lifecycle [`Status`] apart from whichever state is
/// active: `Off → Loading → Ready → (On ↔ Paused)`, with
/// [`stop`](StateMachine::stop) resetting to `Off`. Ticking and state changes
/// are only live while `On`. Calls made in the wrong stage are logged and
/// ignored, never fatal.
///
/// # Example
///
/// ```rust
/// use framestate::{Actor, MachineBuilder, State};
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
/// let mut machine = MachineBuilder::new()
///     .state(State::new("Idle").when("Running", |p: &Player| p.speed > 0.0))
///     .state(State::new("Running").when("Idle", |p: &Player| p.speed == 0.0))
///     .default_state("Idle")
///     .build()
///     .unwrap();
///
/// machine.set_up(Player { speed: 0.0 });
/// assert_eq!(machine.current_state(), Some("Idle"));
///
/// machine.actor_mut().unwrap().speed = 5.0;
/// machine.tick();
/// assert_eq!(machine.current_state(), Some("Running"));
/// ```
pub struct StateMachine<A> {
    id: Uuid,
    label: String,
    status: Status,
    actor: Option<A>,
    states: Vec<State<A>>,
    by_name: HashMap<String, usize>,
    /// Resolved transition targets, one row per state, aligned with that
    /// state's sorted transition list. Rebuilt on every load.
    edges: Vec<Vec<usize>>,
    default_state: Option<usize>,
    current: Option<usize>,
    listeners: Vec<ChangeListener>,
    history: TransitionLog,
    ticks: u64,
}

impl<A: Actor> StateMachine<A> {
    pub(crate) fn from_parts(
        label: String,
        states: Vec<State<A>>,
        by_name: HashMap<String, usize>,
        default_state: Option<usize>,
    ) -> Self {
        StateMachine {
            id: Uuid::new_v4(),
            label,
            status: Status::Off,
            actor: None,
            states,
            by_name,
            edges: Vec::new(),
            default_state,
            current: None,
            listeners: Vec::new(),
            history: TransitionLog::new(),
            ticks: 0,
        }
    }

    /// Bind the actor, load every state, and start ticking.
    ///
    /// Runs the whole `Off → Loading → Ready → On` progression: stores the
    /// actor, sorts each state's transitions and runs its `on_load` hook,
    /// then starts the machine and enters the default state. Ignored with a
    /// warning unless the machine is `Off`.
    ///
    /// After a [`stop`](StateMachine::stop), a fresh `set_up` re-enters the
    /// default state through the normal change path: a retained active state
    /// gets its `on_exit`, and if it already *is* the default state the
    /// enter is skipped.
    pub fn set_up(&mut self, actor: A) {
        if self.status != Status::Off {
            log::warn!(
                "[{}] set_up ignored: status is {}, expected Off",
                self.label,
                self.status
            );
            return;
        }
        self.status = Status::Loading;
        self.actor = Some(actor);
        if self.states.is_empty() {
            log::warn!("[{}] no states attached; machine will idle", self.label);
        }
        self.load_states();
        self.status = Status::Ready;
        if let Some(actor) = self.actor.as_ref() {
            log::debug!(
                "[{}] loaded {} states for actor '{}'",
                self.label,
                self.states.len(),
                actor.name()
            );
        }
        self.start_machine();
    }

    /// Start ticking from the default state.
    ///
    /// Ignored with a warning unless the machine is `Ready`. Called for you
    /// at the end of [`set_up`](StateMachine::set_up).
    pub fn start_machine(&mut self) {
        if self.status != Status::Ready {
            log::warn!(
                "[{}] start_machine ignored: status is {}, expected Ready",
                self.label,
                self.status
            );
            return;
        }
        self.status = Status::On;
        match self.default_state {
            Some(index) => self.switch_to(index),
            None => log::warn!("[{}] no default state to enter", self.label),
        }
    }

    /// Suspend ticking. The active state is retained and no hooks fire.
    pub fn pause(&mut self) {
        if self.status != Status::On {
            log::warn!(
                "[{}] pause ignored: status is {}, expected On",
                self.label,
                self.status
            );
            return;
        }
        self.status = Status::Paused;
        log::info!("[{}] paused", self.label);
    }

    /// Resume ticking after a pause. The active state is unchanged and
    /// `on_enter` does not re-fire.
    pub fn resume(&mut self) {
        if self.status != Status::Paused {
            log::warn!(
                "[{}] resume ignored: status is {}, expected Paused",
                self.label,
                self.status
            );
            return;
        }
        self.status = Status::On;
        log::info!("[{}] resumed", self.label);
    }

    /// Reset the machine to `Off`.
    ///
    /// The active-state reference is deliberately retained, so inspection
    /// after stopping still reports the last active state. A fresh
    /// [`set_up`](StateMachine::set_up) is required before reuse.
    pub fn stop(&mut self) {
        if self.status == Status::Off {
            log::warn!("[{}] stop ignored: already Off", self.label);
            return;
        }
        self.status = Status::Off;
        log::info!("[{}] stopped", self.label);
    }

    /// Main-update tick: evaluate transitions, switch if one fires, then run
    /// the active state's `tick` hook. No-op unless `On`.
    pub fn tick(&mut self) {
        if self.status != Status::On {
            return;
        }
        self.ticks += 1;
        self.advance(TickPhase::Tick);
    }

    /// Post-update tick. Same shape as [`tick`](StateMachine::tick) but runs
    /// the `late_tick` hook and does not advance the tick counter.
    pub fn late_tick(&mut self) {
        if self.status != Status::On {
            return;
        }
        self.advance(TickPhase::LateTick);
    }

    /// Fixed-timestep tick. Same shape as [`tick`](StateMachine::tick) but
    /// runs the `fixed_tick` hook and does not advance the tick counter.
    pub fn fixed_tick(&mut self) {
        if self.status != Status::On {
            return;
        }
        self.advance(TickPhase::FixedTick);
    }

    /// Manually switch to the named state.
    ///
    /// Ignored with a diagnostic unless the machine is `On` and the name
    /// resolves. Switching to the current state is a silent no-op: no hooks,
    /// no notification.
    pub fn change_state(&mut self, name: &str) {
        if self.status != Status::On {
            log::warn!(
                "[{}] change_state ignored: status is {}, expected On",
                self.label,
                self.status
            );
            return;
        }
        match self.by_name.get(name).copied() {
            Some(index) => self.switch_to(index),
            None => log::error!("[{}] change_state: unknown state '{}'", self.label, name),
        }
    }

    /// Subscribe to state changes.
    ///
    /// Listeners run synchronously, in subscription order, immediately after
    /// every successful change, receiving the same record the history keeps.
    pub fn on_state_change<F>(&mut self, listener: F)
    where
        F: FnMut(&TransitionRecord) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// The machine's lifecycle stage.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Name of the active state, if any.
    pub fn current_state(&self) -> Option<&str> {
        self.current.map(|index| self.states[index].name())
    }

    /// Name of the default state, if one was configured.
    pub fn default_state(&self) -> Option<&str> {
        self.default_state.map(|index| self.states[index].name())
    }

    /// The actor context, once bound by [`set_up`](StateMachine::set_up).
    pub fn actor(&self) -> Option<&A> {
        self.actor.as_ref()
    }

    /// Mutable access to the actor context.
    pub fn actor_mut(&mut self) -> Option<&mut A> {
        self.actor.as_mut()
    }

    /// The change history so far.
    pub fn history(&self) -> &TransitionLog {
        &self.history
    }

    /// Number of main-update ticks processed while `On`.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Unique identity of this machine instance.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Diagnostics label given at build time.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of attached states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the machine has no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Whether a state with this name is attached.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Capture a serializable picture of where the machine is.
    ///
    /// Hooks and guards are not captured; a snapshot records position
    /// (status, active state name, tick count) and history only.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            machine_id: self.id,
            timestamp: Utc::now(),
            status: self.status,
            current_state: self
                .current
                .map(|index| self.states[index].name().to_string()),
            ticks: self.ticks,
            history: self.history.clone(),
        }
    }

    /// Restore position from a snapshot taken on an identically configured
    /// machine.
    ///
    /// Requires a loaded machine (`Ready`, `On`, or `Paused`). Swaps the
    /// active state, tick count, and history without firing any exit/enter
    /// hooks or notifications: restoration is recovery, not a transition.
    /// The machine's live status is left untouched.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        if !matches!(self.status, Status::Ready | Status::On | Status::Paused) {
            return Err(SnapshotError::MachineNotLoaded);
        }
        let current = match &snapshot.current_state {
            Some(name) => Some(
                self.by_name
                    .get(name)
                    .copied()
                    .ok_or_else(|| SnapshotError::UnknownState(name.clone()))?,
            ),
            None => None,
        };
        self.current = current;
        self.ticks = snapshot.ticks;
        self.history = snapshot.history.clone();
        Ok(())
    }

    /// Sort every state's transitions, rebuild the resolved edge table, and
    /// run each state's `on_load` hook in registration order.
    fn load_states(&mut self) {
        for state in &mut self.states {
            state.sort_transitions();
        }
        self.edges.clear();
        for (index, state) in self.states.iter().enumerate() {
            let mut row = Vec::with_capacity(state.transitions().len());
            for transition in state.transitions() {
                match self.by_name.get(transition.target()).copied() {
                    Some(target) => row.push(target),
                    None => {
                        // Targets are validated at build time; if a name
                        // still fails to resolve, the edge points back at
                        // its own state, which the change path treats as a
                        // no-op.
                        log::error!(
                            "[{}] state '{}' targets unknown state '{}'",
                            self.label,
                            state.name(),
                            transition.target()
                        );
                        row.push(index);
                    }
                }
            }
            self.edges.push(row);
        }
        let Some(actor) = self.actor.as_mut() else {
            return;
        };
        for state in &mut self.states {
            state.load(actor);
        }
    }

    /// One driver phase: evaluate → switch → run the phase hook, in exactly
    /// that order, so a one-frame state still sees its tick hook.
    fn advance(&mut self, phase: TickPhase) {
        if let Some(next) = self.resolve_transition() {
            self.switch_to(next);
        }
        let Some(current) = self.current else {
            return;
        };
        let Some(actor) = self.actor.as_mut() else {
            return;
        };
        self.states[current].run_phase(phase, actor);
    }

    /// First-match scan of the active state's sorted transitions.
    ///
    /// Returns the resolved target of the first transition whose guard
    /// fires, or `None` when nothing fires or no state is active.
    fn resolve_transition(&self) -> Option<usize> {
        let current = self.current?;
        let actor = self.actor.as_ref()?;
        self.states[current]
            .transitions()
            .iter()
            .position(|transition| transition.fires(actor))
            .map(|slot| self.edges[current][slot])
    }

    /// Switch the active state, firing exit/enter hooks and notifying
    /// listeners. Switching to the current state is a no-op.
    fn switch_to(&mut self, next: usize) {
        if self.status != Status::On {
            log::warn!(
                "[{}] state change ignored: status is {}, expected On",
                self.label,
                self.status
            );
            return;
        }
        if Some(next) == self.current {
            return;
        }
        let from = self.current.map(|index| self.states[index].name().to_string());
        {
            let Some(actor) = self.actor.as_mut() else {
                return;
            };
            if let Some(current) = self.current {
                self.states[current].exit(actor);
            }
            self.states[next].enter(actor);
        }
        self.current = Some(next);
        let record = TransitionRecord {
            from,
            to: self.states[next].name().to_string(),
            timestamp: Utc::now(),
            tick: self.ticks,
        };
        log::debug!(
            "[{}] {} -> {}",
            self.label,
            record.from.as_deref().unwrap_or("(none)"),
            record.to
        );
        self.history.record(record.clone());
        for listener in &mut self.listeners {
            listener(&record);
        }
    }
}
