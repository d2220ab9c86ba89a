//! Player Movement State Machine
//!
//! This example drives a small platformer-style actor through a few frames
//! of simulated input, showing:
//! - Prioritized transitions (falling beats running)
//! - Lifecycle hooks mutating the actor
//! - A state-change listener
//!
//! Run with: cargo run --example player_movement

use framestate::{Actor, MachineBuilder, State};

struct Player {
    speed: f32,
    grounded: bool,
    frames_in_air: u32,
}

impl Actor for Player {
    fn name(&self) -> &str {
        "player"
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let mut machine = MachineBuilder::new()
        .name("player-brain")
        .state(
            State::new("Idle")
                .transition("Falling", 10, |p: &Player| !p.grounded)
                .when("Running", |p: &Player| p.speed > 0.0),
        )
        .state(
            State::new("Running")
                .transition("Falling", 10, |p: &Player| !p.grounded)
                .when("Idle", |p: &Player| p.speed == 0.0),
        )
        .state(
            State::new("Falling")
                .tick(|p: &mut Player| p.frames_in_air += 1)
                .when("Idle", |p: &Player| p.grounded),
        )
        .default_state("Idle")
        .build()
        .expect("machine configuration is valid");

    machine.on_state_change(|record| {
        println!(
            "  >> {} -> {} (tick {})",
            record.from.as_deref().unwrap_or("(start)"),
            record.to,
            record.tick
        );
    });

    machine.set_up(Player {
        speed: 0.0,
        grounded: true,
        frames_in_air: 0,
    });

    println!("\nFrame 1: push the stick");
    machine.actor_mut().expect("actor is bound").speed = 4.0;
    machine.tick();

    println!("\nFrame 2: walk off a ledge");
    machine.actor_mut().expect("actor is bound").grounded = false;
    machine.tick();

    println!("\nFrames 3-4: falling");
    machine.tick();
    machine.tick();

    println!("\nFrame 5: land");
    let player = machine.actor_mut().expect("actor is bound");
    player.grounded = true;
    player.speed = 0.0;
    machine.tick();

    let player = machine.actor().expect("actor is bound");
    println!("\nFrames spent airborne: {}", player.frames_in_air);
    println!("Visited: {}", machine.history().path().join(" -> "));
}
