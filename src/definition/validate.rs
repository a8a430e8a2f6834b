//! Static checks over a state collection.
//!
//! A running machine only notices a bad destination when the transition is
//! first exercised. [`States::validate`] walks every transition up front and
//! accumulates every defect it finds instead of stopping at the first one.

use super::state::States;
use crate::core::{EventId, StateId};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Why a transition's destination cannot be entered.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ConfigurationDefect {
    #[error("destination state is not declared")]
    UndeclaredState,

    #[error("destination state has no action bound")]
    MissingAction,
}

/// A transition whose destination cannot be entered.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("transition from `{}` on `{}` to `{}`: {defect}", .from.name(), .event.name(), .to.name())]
pub struct DefinitionIssue<S: StateId, E: EventId> {
    pub from: S,
    pub event: E,
    pub to: S,
    pub defect: ConfigurationDefect,
}

impl<S: StateId, E: EventId, C> States<S, E, C> {
    /// Why `to` cannot be entered, or `None` if it is declared with an action.
    pub fn destination_defect(&self, to: &S) -> Option<ConfigurationDefect> {
        match self.get(to) {
            None => Some(ConfigurationDefect::UndeclaredState),
            Some(state) if !state.has_action() => Some(ConfigurationDefect::MissingAction),
            Some(_) => None,
        }
    }

    /// Check every transition, accumulating ALL defects.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cascade_fsm::core::{EventType, StateType};
    /// use cascade_fsm::definition::{ConfigurationDefect, Events, State, States};
    /// use stillwater::validation::Validation;
    ///
    /// let states = States::<StateType, EventType>::new()
    ///     .state(StateType::DEFAULT, State::new(Events::new().on("Start", "Hub").on("Skip", "Nowhere")))
    ///     .state("Hub", State::new(Events::new()));
    ///
    /// match states.validate() {
    ///     Validation::Failure(issues) => {
    ///         assert_eq!(issues.len(), 2);
    ///         assert!(issues.iter().any(|i| i.defect == ConfigurationDefect::MissingAction));
    ///         assert!(issues.iter().any(|i| i.defect == ConfigurationDefect::UndeclaredState));
    ///     }
    ///     Validation::Success(_) => panic!("expected defects"),
    /// }
    /// ```
    pub fn validate(&self) -> Validation<(), NonEmptyVec<DefinitionIssue<S, E>>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<DefinitionIssue<S, E>>>> = Vec::new();

        for (from, state) in self.iter() {
            for (event, to) in state.events().iter() {
                let check = match self.destination_defect(to) {
                    Some(defect) => Validation::fail(DefinitionIssue {
                        from: from.clone(),
                        event: event.clone(),
                        to: to.clone(),
                        defect,
                    }),
                    None => Validation::success(()),
                };
                checks.push(check);
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
