//! Errors surfaced by event submission.

use crate::core::{EventId, StateId};
use crate::definition::{ActionError, ConfigurationDefect};
use thiserror::Error;

/// Errors that can occur while submitting an event.
#[derive(Debug, Error)]
pub enum MachineError<S: StateId, E: EventId> {
    /// The current state has no transition for the event. Expected control
    /// flow; earlier steps of the same cascade stay committed.
    #[error("Event `{}` is not accepted in state `{}`", .event.name(), .state.name())]
    Rejected { state: S, event: E },

    /// The definition routes to a state that cannot be entered. Nothing was
    /// committed for this transition.
    #[error("Transition from `{}` on `{}` to `{}` is misconfigured: {defect}", .from.name(), .event.name(), .to.name())]
    Configuration {
        from: S,
        event: E,
        to: S,
        defect: ConfigurationDefect,
    },

    /// The entry action of `state` failed. The transition into `state` stays
    /// committed.
    #[error("Action for state `{}` failed", .state.name())]
    Action {
        state: S,
        #[source]
        source: ActionError,
    },

    /// The submission tried to commit more transitions than allowed.
    #[error("Cascade exceeded {limit} transitions at state `{}` on `{}`", .state.name(), .event.name())]
    CascadeLimit { limit: usize, state: S, event: E },
}

impl<S: StateId, E: EventId> MachineError<S, E> {
    /// The current state has no transition for the event.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// The transition targets an undeclared or actionless state.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// An entry action returned an error.
    pub fn is_action(&self) -> bool {
        matches!(self, Self::Action { .. })
    }

    /// The cascade hit the configured transition limit.
    pub fn is_cascade_limit(&self) -> bool {
        matches!(self, Self::CascadeLimit { .. })
    }
}
