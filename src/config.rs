//! Runtime configuration for machines.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of transitions retained in a machine's history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

/// Errors that can occur when loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse machine configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("max_transitions must be at least 1")]
    ZeroTransitionLimit,
}

/// Tunables for a machine.
///
/// Missing fields take their defaults, so `{}` is a valid configuration.
///
/// # Example
///
/// ```rust
/// use cascade_fsm::config::MachineConfig;
///
/// let config = MachineConfig::from_json(r#"{ "max_transitions": 8 }"#).unwrap();
/// assert_eq!(config.max_transitions, Some(8));
/// assert_eq!(config.history_capacity, 64);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Upper bound on transitions committed by one submission, cascade included.
    /// `None` leaves cascades unbounded.
    pub max_transitions: Option<usize>,

    /// Transitions kept in the machine's history. Zero disables history.
    pub history_capacity: usize,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            max_transitions: None,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl MachineConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_transitions == Some(0) {
            return Err(ConfigError::ZeroTransitionLimit);
        }
        Ok(())
    }
}
