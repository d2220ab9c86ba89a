//! Optional lifecycle callback slots for states.
//!
//! A state participates in the lifecycle by filling whichever slots it cares
//! about; an absent slot is a permanent no-op. This replaces the usual
//! reflection-based "define a method with the right name" convention with an
//! explicit struct of optional callbacks.

/// A lifecycle callback. Receives the actor context mutably.
pub type Hook<A> = Box<dyn FnMut(&mut A) + Send>;

/// The three per-frame phases the driver may run.
///
/// The hosting update loop calls the machine once per phase per frame:
/// [`Tick`](TickPhase::Tick) in the main update, [`LateTick`](TickPhase::LateTick)
/// after it, and [`FixedTick`](TickPhase::FixedTick) on the fixed timestep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickPhase {
    /// Main update phase. Transition evaluation happens here too.
    Tick,
    /// Post-update phase.
    LateTick,
    /// Fixed-timestep phase.
    FixedTick,
}

/// The six lifecycle slots a state may fill.
///
/// `on_load` runs once per load cycle, `on_enter`/`on_exit` bracket every
/// activation, and the three tick slots run while the state is active.
pub struct Hooks<A> {
    pub(crate) on_load: Option<Hook<A>>,
    pub(crate) on_enter: Option<Hook<A>>,
    pub(crate) on_exit: Option<Hook<A>>,
    pub(crate) tick: Option<Hook<A>>,
    pub(crate) late_tick: Option<Hook<A>>,
    pub(crate) fixed_tick: Option<Hook<A>>,
}

impl<A> Default for Hooks<A> {
    fn default() -> Self {
        Hooks {
            on_load: None,
            on_enter: None,
            on_exit: None,
            tick: None,
            late_tick: None,
            fixed_tick: None,
        }
    }
}

impl<A> Hooks<A> {
    pub(crate) fn run_load(&mut self, actor: &mut A) {
        run(&mut self.on_load, actor);
    }

    pub(crate) fn run_enter(&mut self, actor: &mut A) {
        run(&mut self.on_enter, actor);
    }

    pub(crate) fn run_exit(&mut self, actor: &mut A) {
        run(&mut self.on_exit, actor);
    }

    pub(crate) fn run_phase(&mut self, phase: TickPhase, actor: &mut A) {
        let slot = match phase {
            TickPhase::Tick => &mut self.tick,
            TickPhase::LateTick => &mut self.late_tick,
            TickPhase::FixedTick => &mut self.fixed_tick,
        };
        run(slot, actor);
    }
}

/// Absent slot = no-op.
fn run<A>(slot: &mut Option<Hook<A>>, actor: &mut A) {
    if let Some(hook) = slot {
        hook(actor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Probe {
        loads: usize,
        enters: usize,
        exits: usize,
        ticks: usize,
    }

    #[test]
    fn absent_slots_are_noops() {
        let mut hooks: Hooks<Probe> = Hooks::default();
        let mut probe = Probe::default();

        hooks.run_load(&mut probe);
        hooks.run_enter(&mut probe);
        hooks.run_exit(&mut probe);
        hooks.run_phase(TickPhase::Tick, &mut probe);
        hooks.run_phase(TickPhase::LateTick, &mut probe);
        hooks.run_phase(TickPhase::FixedTick, &mut probe);

        assert_eq!(probe.loads, 0);
        assert_eq!(probe.enters, 0);
        assert_eq!(probe.exits, 0);
        assert_eq!(probe.ticks, 0);
    }

    #[test]
    fn filled_slots_receive_the_actor() {
        let mut hooks: Hooks<Probe> = Hooks {
            on_load: Some(Box::new(|p| p.loads += 1)),
            on_enter: Some(Box::new(|p| p.enters += 1)),
            on_exit: Some(Box::new(|p| p.exits += 1)),
            tick: Some(Box::new(|p| p.ticks += 1)),
            ..Hooks::default()
        };
        let mut probe = Probe::default();

        hooks.run_load(&mut probe);
        hooks.run_enter(&mut probe);
        hooks.run_enter(&mut probe);
        hooks.run_exit(&mut probe);
        hooks.run_phase(TickPhase::Tick, &mut probe);

        assert_eq!(probe.loads, 1);
        assert_eq!(probe.enters, 2);
        assert_eq!(probe.exits, 1);
        assert_eq!(probe.ticks, 1);
    }

    #[test]
    fn phases_dispatch_to_distinct_slots() {
        let mut hooks: Hooks<Vec<&'static str>> = Hooks {
            tick: Some(Box::new(|log| log.push("tick"))),
            late_tick: Some(Box::new(|log| log.push("late"))),
            fixed_tick: Some(Box::new(|log| log.push("fixed"))),
            ..Hooks::default()
        };
        let mut log = Vec::new();

        hooks.run_phase(TickPhase::FixedTick, &mut log);
        hooks.run_phase(TickPhase::Tick, &mut log);
        hooks.run_phase(TickPhase::LateTick, &mut log);

        assert_eq!(log, vec!["fixed", "tick", "late"]);
    }
}
