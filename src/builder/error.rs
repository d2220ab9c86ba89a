//! Build errors for machine construction.

use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Default state not specified. Call .default_state(name) before .build()")]
    MissingDefaultState,

    #[error("Default state '{0}' is not a registered state")]
    UnknownDefaultState(String),

    #[error("Duplicate state name '{0}'. State names must be unique")]
    DuplicateState(String),

    #[error("State '{from}' has a transition to unknown state '{target}'")]
    UnknownTarget { from: String, target: String },
}
