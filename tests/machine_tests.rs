//! End-to-end scenarios driving a machine the way a host update loop would.

use framestate::{Actor, MachineBuilder, Snapshot, SnapshotError, State, Status};

#[derive(Default)]
struct Counter {
    x: i32,
    speed: f32,
    enters: Vec<&'static str>,
    exits: Vec<&'static str>,
    phase_log: Vec<&'static str>,
}

impl Actor for Counter {
    fn name(&self) -> &str {
        "counter"
    }
}

#[test]
fn higher_priority_transition_is_evaluated_first() {
    // A -> B when x > 5 (priority 0), A -> C when x > 0 (priority 10).
    // With x = 10 both guards pass, so the priority-10 edge to C wins.
    let mut machine = MachineBuilder::new()
        .state(
            State::new("A")
                .transition("B", 0, |c: &Counter| c.x > 5)
                .transition("C", 10, |c: &Counter| c.x > 0),
        )
        .state(State::new("B"))
        .state(State::new("C"))
        .default_state("A")
        .build()
        .unwrap();

    machine.set_up(Counter {
        x: 10,
        ..Counter::default()
    });
    machine.tick();

    assert_eq!(machine.current_state(), Some("C"));
}

#[test]
fn equal_priority_keeps_registration_order() {
    let mut machine = MachineBuilder::new()
        .state(
            State::new("A")
                .when("First", |_: &Counter| true)
                .when("Second", |_: &Counter| true),
        )
        .state(State::new("First"))
        .state(State::new("Second"))
        .default_state("A")
        .build()
        .unwrap();

    machine.set_up(Counter::default());
    machine.tick();

    assert_eq!(machine.current_state(), Some("First"));
}

#[test]
fn idle_to_running_fires_each_hook_exactly_once() {
    let mut machine = MachineBuilder::new()
        .state(
            State::new("Idle")
                .on_enter(|c: &mut Counter| c.enters.push("Idle"))
                .on_exit(|c: &mut Counter| c.exits.push("Idle"))
                .when("Running", |c: &Counter| c.speed > 0.0),
        )
        .state(State::new("Running").on_enter(|c: &mut Counter| c.enters.push("Running")))
        .default_state("Idle")
        .build()
        .unwrap();

    machine.set_up(Counter::default());
    assert_eq!(machine.current_state(), Some("Idle"));

    machine.actor_mut().unwrap().speed = 5.0;
    machine.tick();

    assert_eq!(machine.current_state(), Some("Running"));
    let counter = machine.actor().unwrap();
    assert_eq!(counter.exits, vec!["Idle"]);
    assert_eq!(counter.enters, vec!["Idle", "Running"]);
}

#[test]
fn self_targeting_transition_never_reenters() {
    let mut machine = MachineBuilder::new()
        .state(
            State::new("Loop")
                .on_enter(|c: &mut Counter| c.enters.push("Loop"))
                .when("Loop", |_: &Counter| true),
        )
        .default_state("Loop")
        .build()
        .unwrap();

    machine.set_up(Counter::default());
    machine.tick();
    machine.tick();
    machine.tick();

    assert_eq!(machine.actor().unwrap().enters, vec!["Loop"]);
    assert_eq!(machine.history().len(), 1);
}

#[test]
fn each_phase_runs_its_own_hook() {
    let mut machine = MachineBuilder::new()
        .state(
            State::new("Active")
                .tick(|c: &mut Counter| c.phase_log.push("tick"))
                .late_tick(|c: &mut Counter| c.phase_log.push("late"))
                .fixed_tick(|c: &mut Counter| c.phase_log.push("fixed")),
        )
        .default_state("Active")
        .build()
        .unwrap();

    machine.set_up(Counter::default());
    machine.fixed_tick();
    machine.tick();
    machine.late_tick();

    assert_eq!(
        machine.actor().unwrap().phase_log,
        vec!["fixed", "tick", "late"]
    );
}

#[test]
fn states_without_hooks_participate_silently() {
    let mut machine = MachineBuilder::new()
        .state(State::new("Bare").when("AlsoBare", |_: &Counter| true))
        .state(State::new("AlsoBare"))
        .default_state("Bare")
        .build()
        .unwrap();

    machine.set_up(Counter::default());
    machine.tick();
    machine.late_tick();
    machine.fixed_tick();

    assert_eq!(machine.current_state(), Some("AlsoBare"));
    assert!(machine.actor().unwrap().enters.is_empty());
}

#[test]
fn stop_then_tick_changes_nothing() {
    let mut machine = MachineBuilder::new()
        .state(State::new("A").when("B", |c: &Counter| c.x > 0))
        .state(State::new("B"))
        .default_state("A")
        .build()
        .unwrap();

    machine.set_up(Counter::default());
    machine.stop();
    machine.actor_mut().unwrap().x = 99;
    machine.tick();

    assert_eq!(machine.status(), Status::Off);
    assert_eq!(machine.current_state(), Some("A"));
    assert_eq!(machine.ticks(), 0);
}

#[test]
fn pause_then_resume_round_trip() {
    let mut machine = MachineBuilder::new()
        .state(State::new("A").on_enter(|c: &mut Counter| c.enters.push("A")))
        .default_state("A")
        .build()
        .unwrap();

    machine.set_up(Counter::default());
    machine.pause();
    machine.resume();

    assert_eq!(machine.status(), Status::On);
    assert_eq!(machine.current_state(), Some("A"));
    assert_eq!(machine.actor().unwrap().enters, vec!["A"]);
}

#[test]
fn snapshot_round_trips_and_restores_position() {
    let build = || {
        MachineBuilder::new()
            .state(State::new("Idle").when("Running", |c: &Counter| c.speed > 0.0))
            .state(State::new("Running").when("Idle", |c: &Counter| c.speed == 0.0))
            .default_state("Idle")
            .build()
            .unwrap()
    };

    let mut machine = build();
    machine.set_up(Counter::default());
    machine.actor_mut().unwrap().speed = 2.0;
    machine.tick();
    machine.tick();
    assert_eq!(machine.current_state(), Some("Running"));

    let bytes = machine.snapshot().to_bytes().unwrap();
    let snapshot = Snapshot::from_bytes(&bytes).unwrap();

    let mut replacement = build();
    replacement.set_up(Counter::default());
    replacement.restore(&snapshot).unwrap();

    assert_eq!(replacement.current_state(), Some("Running"));
    assert_eq!(replacement.ticks(), 2);
    assert_eq!(replacement.history().path(), vec!["Idle", "Running"]);
}

#[test]
fn restore_does_not_fire_hooks() {
    let build = || {
        MachineBuilder::new()
            .state(
                State::new("Idle")
                    .on_exit(|c: &mut Counter| c.exits.push("Idle"))
                    .when("Running", |c: &Counter| c.speed > 0.0),
            )
            .state(State::new("Running").on_enter(|c: &mut Counter| c.enters.push("Running")))
            .default_state("Idle")
            .build()
            .unwrap()
    };

    let mut machine = build();
    machine.set_up(Counter::default());
    machine.actor_mut().unwrap().speed = 1.0;
    machine.tick();
    let snapshot = machine.snapshot();

    let mut replacement = build();
    replacement.set_up(Counter::default());
    let hooks_before = replacement.actor().unwrap().enters.clone();
    replacement.restore(&snapshot).unwrap();

    assert_eq!(replacement.current_state(), Some("Running"));
    assert_eq!(replacement.actor().unwrap().enters, hooks_before);
    assert!(replacement.actor().unwrap().exits.is_empty());
}

#[test]
fn restore_rejects_unloaded_machines_and_foreign_states() {
    let mut source = MachineBuilder::new()
        .state(State::<Counter>::new("Elsewhere"))
        .default_state("Elsewhere")
        .build()
        .unwrap();
    source.set_up(Counter::default());
    let snapshot = source.snapshot();

    let mut unloaded = MachineBuilder::new()
        .state(State::<Counter>::new("Idle"))
        .default_state("Idle")
        .build()
        .unwrap();
    assert!(matches!(
        unloaded.restore(&snapshot),
        Err(SnapshotError::MachineNotLoaded)
    ));

    unloaded.set_up(Counter::default());
    assert!(matches!(
        unloaded.restore(&snapshot),
        Err(SnapshotError::UnknownState(name)) if name == "Elsewhere"
    ));
}

#[test]
fn listener_sees_manual_changes_too() {
    use std::sync::{Arc, Mutex};

    let seen: Arc<Mutex<Vec<(Option<String>, String)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let mut machine = MachineBuilder::new()
        .state(State::<Counter>::new("A"))
        .state(State::<Counter>::new("B"))
        .default_state("A")
        .build()
        .unwrap();
    machine.on_state_change(move |record| {
        sink.lock()
            .unwrap()
            .push((record.from.clone(), record.to.clone()));
    });

    machine.set_up(Counter::default());
    machine.change_state("B");

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], (None, "A".to_string()));
    assert_eq!(seen[1], (Some("A".to_string()), "B".to_string()));
}
