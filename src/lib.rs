//! Framestate: a frame-driven state machine for game actors.
//!
//! A machine owns a set of named [`State`]s and the opaque actor context they
//! act on. Every main-update tick it evaluates the active state's guarded
//! transitions in priority order, switches on the first one that fires
//! (running `on_exit`/`on_enter` hooks and notifying listeners), then runs
//! the active state's tick hook — so a freshly entered state always ticks on
//! the frame it was entered.
//!
//! # Core Concepts
//!
//! - **Actor**: the context object the machine controls; guards read it,
//!   hooks mutate it
//! - **Guards**: pure predicates that control transitions, re-evaluated every
//!   tick
//! - **Hooks**: optional lifecycle callbacks per state; absent hooks are
//!   no-ops
//! - **Status**: the machine's own lifecycle (`Off → Loading → Ready →
//!   On ↔ Paused`), separate from which state is active
//!
//! # Example
//!
//! ```rust
//! use framestate::{Actor, MachineBuilder, State};
//!
//! struct Player {
//!     speed: f32,
//! }
//!
//! impl Actor for Player {
//!     fn name(&self) -> &str {
//!         "player"
//!     }
//! }
//!
//! let mut machine = MachineBuilder::new()
//!     .name("player-brain")
//!     .state(
//!         State::new("Idle")
//!             .when("Running", |p: &Player| p.speed > 0.0),
//!     )
//!     .state(
//!         State::new("Running")
//!             .tick(|p: &mut Player| p.speed *= 0.9)
//!             .when("Idle", |p: &Player| p.speed < 0.1),
//!     )
//!     .default_state("Idle")
//!     .build()
//!     .unwrap();
//!
//! machine.set_up(Player { speed: 0.0 });
//! assert_eq!(machine.current_state(), Some("Idle"));
//!
//! machine.actor_mut().unwrap().speed = 6.0;
//! machine.tick();
//! assert_eq!(machine.current_state(), Some("Running"));
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod snapshot;

// Re-export commonly used types
pub use self::builder::{BuildError, MachineBuilder};
pub use self::core::{
    Actor, Guard, Hook, Hooks, State, Status, TickPhase, Transition, TransitionLog,
    TransitionRecord,
};
pub use self::machine::{ChangeListener, StateMachine};
pub use self::snapshot::{Snapshot, SnapshotError, SNAPSHOT_VERSION};
