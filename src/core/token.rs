//! String-backed state and event identifiers.

use super::state::{EventId, StateId};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A state named by a string.
///
/// The empty string is the uninitialized state.
///
/// # Example
///
/// ```rust
/// use cascade_fsm::core::{StateId, StateType};
///
/// const OFF: StateType = StateType::from_static("Off");
///
/// assert_eq!(OFF.name(), "Off");
/// assert!(StateType::DEFAULT.is_uninitialized());
/// assert_eq!(StateType::new(String::from("Off")), OFF);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateType(Cow<'static, str>);

impl StateType {
    /// The uninitialized state.
    pub const DEFAULT: StateType = StateType::from_static("");

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StateType {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl StateId for StateType {
    fn name(&self) -> &str {
        &self.0
    }

    fn uninitialized() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for StateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for StateType {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for StateType {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// An event named by a string.
///
/// `"NoOp"` is the sentinel that terminates a cascade.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventType(Cow<'static, str>);

impl EventType {
    /// The no-op sentinel.
    pub const NO_OP: EventType = EventType::from_static("NoOp");

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl EventId for EventType {
    fn name(&self) -> &str {
        &self.0
    }

    fn noop() -> Self {
        Self::NO_OP
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for EventType {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for EventType {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
