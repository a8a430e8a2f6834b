//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::config::MachineConfig;
use crate::core::{EventId, StateId};
use crate::definition::States;
use crate::runtime::Machine;
use std::sync::Arc;
use stillwater::validation::Validation;

/// Builder for constructing machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use cascade_fsm::builder::MachineBuilder;
/// use cascade_fsm::core::{EventType, StateType};
/// use cascade_fsm::definition::{Events, State, States};
///
/// let states = States::<StateType, EventType>::new()
///     .state(StateType::DEFAULT, State::new(Events::new().on("SwitchOff", "Off")))
///     .state("Off", State::terminal(Events::new().on("SwitchOn", "On")))
///     .state("On", State::terminal(Events::new().on("SwitchOff", "Off")));
///
/// let machine = MachineBuilder::new(states)
///     .id("hallway-light")
///     .max_transitions(16)
///     .strict()
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.id(), "hallway-light");
/// machine.fire("SwitchOff").unwrap();
/// ```
pub struct MachineBuilder<S: StateId, E: EventId, C = ()> {
    states: Arc<States<S, E, C>>,
    id: Option<String>,
    initial: Option<S>,
    config: MachineConfig,
    strict: bool,
}

impl<S: StateId, E: EventId, C> MachineBuilder<S, E, C> {
    /// Create a new builder over a definition.
    pub fn new(states: impl Into<Arc<States<S, E, C>>>) -> Self {
        Self {
            states: states.into(),
            id: None,
            initial: None,
            config: MachineConfig::default(),
            strict: false,
        }
    }

    /// Set the machine id used in logs. Defaults to a random UUID.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the initial state. Defaults to the uninitialized state.
    pub fn initial(mut self, state: impl Into<S>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Cap the transitions a single submission may commit.
    pub fn max_transitions(mut self, limit: usize) -> Self {
        self.config.max_transitions = Some(limit);
        self
    }

    /// Set how many transitions the history retains.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    /// Validate the definition before building.
    ///
    /// Misconfigured transitions are reported all at once instead of when
    /// each is first exercised.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Build the machine.
    pub fn build(self) -> Result<Machine<S, E, C>, BuildError<S, E>> {
        self.config.validate()?;
        let initial = self.initial.unwrap_or_else(S::uninitialized);

        if self.strict {
            if let Validation::Failure(issues) = self.states.validate() {
                let issues: Vec<_> = issues.iter().cloned().collect();
                tracing::error!(count = issues.len(), "Machine definition failed validation");
                return Err(BuildError::InvalidDefinition { issues });
            }
            if !initial.is_uninitialized() && !self.states.contains(&initial) {
                return Err(BuildError::UndeclaredInitialState { initial });
            }
        }

        let id = self
            .id
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        tracing::debug!(
            machine = %id,
            initial = initial.name(),
            states = self.states.len(),
            "Machine built"
        );
        Ok(Machine::with_config(id, self.states, initial, self.config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::core::{EventType, StateType};
    use crate::definition::{ConfigurationDefect, Events, State};

    fn lightswitch() -> States<StateType, EventType> {
        States::new()
            .state(StateType::DEFAULT, State::new(Events::new().on("SwitchOff", "Off")))
            .state("Off", State::terminal(Events::new().on("SwitchOn", "On")))
            .state("On", State::terminal(Events::new().on("SwitchOff", "Off")))
    }

    #[test]
    fn defaults_start_uninitialized() {
        let machine = MachineBuilder::new(lightswitch()).build().unwrap();

        assert_eq!(machine.current(), StateType::DEFAULT);
        assert_eq!(machine.config(), &MachineConfig::default());
        assert!(!machine.id().is_empty());
    }

    #[test]
    fn fluent_api_applies_settings() {
        let machine = MachineBuilder::new(lightswitch())
            .id("porch")
            .initial("On")
            .max_transitions(4)
            .history_capacity(2)
            .build()
            .unwrap();

        assert_eq!(machine.id(), "porch");
        assert_eq!(machine.current(), StateType::from_static("On"));
        assert_eq!(machine.config().max_transitions, Some(4));
        assert_eq!(machine.config().history_capacity, 2);
    }

    #[test]
    fn strict_build_rejects_misconfigured_definition() {
        let states = lightswitch().state("Off", State::new(Events::new().on("SwitchOn", "On")));

        let result = MachineBuilder::new(states).strict().build();

        match result {
            Err(BuildError::InvalidDefinition { issues }) => {
                assert_eq!(issues.len(), 2);
                assert!(issues
                    .iter()
                    .all(|issue| issue.defect == ConfigurationDefect::MissingAction));
            }
            Err(other) => panic!("Expected invalid definition, got {other:?}"),
            Ok(_) => panic!("Expected invalid definition, got a machine"),
        }
    }

    #[test]
    fn lenient_build_defers_defects_to_runtime() {
        let states = lightswitch().state("Off", State::new(Events::new().on("SwitchOn", "On")));

        let machine = MachineBuilder::new(states).build().unwrap();

        assert!(machine.fire("SwitchOff").unwrap_err().is_configuration());
    }

    #[test]
    fn strict_build_requires_declared_initial_state() {
        let result = MachineBuilder::new(lightswitch())
            .initial("Attic")
            .strict()
            .build();

        assert!(matches!(
            result,
            Err(BuildError::UndeclaredInitialState { .. })
        ));
    }

    #[test]
    fn zero_transition_limit_is_rejected() {
        let result = MachineBuilder::new(lightswitch()).max_transitions(0).build();

        assert!(matches!(
            result,
            Err(BuildError::Config(ConfigError::ZeroTransitionLimit))
        ));
    }

    #[test]
    fn config_from_json_is_applied() {
        let config = MachineConfig::from_json(r#"{ "history_capacity": 1 }"#).unwrap();
        let machine = MachineBuilder::new(lightswitch())
            .config(config)
            .build()
            .unwrap();

        machine.fire("SwitchOff").unwrap();
        machine.fire("SwitchOn").unwrap();

        let history = machine.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().unwrap().to, StateType::from_static("On"));
    }
}
