//! Core state machine types.
//!
//! This module holds the building blocks the machine is assembled from:
//! - The [`Actor`] context trait
//! - [`Guard`] predicates and [`Transition`] edges
//! - [`State`] nodes with optional lifecycle [`Hooks`]
//! - The machine's own [`Status`] stages
//! - Name-based change history in [`TransitionLog`]

mod actor;
mod guard;
mod history;
mod hooks;
mod state;
mod status;
mod transition;

pub use actor::Actor;
pub use guard::Guard;
pub use history::{TransitionLog, TransitionRecord};
pub use hooks::{Hook, Hooks, TickPhase};
pub use state::State;
pub use status::Status;
pub use transition::Transition;
