//! Build errors for the machine builder.

use crate::config::ConfigError;
use crate::core::{EventId, StateId};
use crate::definition::DefinitionIssue;
use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error)]
pub enum BuildError<S: StateId, E: EventId> {
    #[error("Machine definition has {} misconfigured transition(s)", .issues.len())]
    InvalidDefinition { issues: Vec<DefinitionIssue<S, E>> },

    #[error("Initial state `{}` is not declared. Declare it or start uninitialized", .initial.name())]
    UndeclaredInitialState { initial: S },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
