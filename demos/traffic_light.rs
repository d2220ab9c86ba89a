//! Traffic Light State Machine
//!
//! A cyclic machine where each state hands off to the next after a timer
//! expires. The actor is just the timer.
//!
//! Run with: cargo run --example traffic_light

use framestate::{Actor, MachineBuilder, State};

struct Timer {
    remaining: u32,
}

impl Actor for Timer {
    fn name(&self) -> &str {
        "signal-timer"
    }
}

fn phase(name: &str, next: &'static str, duration: u32) -> State<Timer> {
    State::new(name)
        .on_enter(move |t: &mut Timer| t.remaining = duration)
        .tick(|t: &mut Timer| t.remaining = t.remaining.saturating_sub(1))
        .when(next, |t: &Timer| t.remaining == 0)
}

fn main() {
    let mut machine = MachineBuilder::new()
        .name("traffic-light")
        .state(phase("Red", "Green", 3))
        .state(phase("Green", "Yellow", 2))
        .state(phase("Yellow", "Red", 1))
        .default_state("Red")
        .build()
        .expect("machine configuration is valid");

    machine.set_up(Timer { remaining: 0 });

    println!("=== Traffic Light ===");
    for frame in 1..=12 {
        machine.tick();
        let light = machine.current_state().unwrap_or("(none)");
        let timer = machine.actor().map(|t| t.remaining).unwrap_or(0);
        println!("frame {frame:2}: {light:6} ({timer} remaining)");
    }

    println!("\nCycle: {}", machine.history().path().join(" -> "));
}
