//! Per-state transition tables.

use crate::core::{EventId, StateId};
use std::collections::HashMap;

/// Mapping from event to destination state.
///
/// # Example
///
/// ```rust
/// use cascade_fsm::core::{EventType, StateType};
/// use cascade_fsm::definition::Events;
///
/// let events = Events::new()
///     .on(EventType::from_static("Coin"), StateType::from_static("Unlocked"))
///     .on(EventType::from_static("Push"), StateType::from_static("Locked"));
///
/// assert!(events.accepts(&EventType::from_static("Coin")));
/// assert_eq!(
///     events.get(&EventType::from_static("Push")),
///     Some(&StateType::from_static("Locked"))
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Events<S: StateId, E: EventId> {
    table: HashMap<E, S>,
}

impl<S: StateId, E: EventId> Events<S, E> {
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Route `event` to `destination`, replacing any earlier route for the event.
    pub fn on(mut self, event: impl Into<E>, destination: impl Into<S>) -> Self {
        self.table.insert(event.into(), destination.into());
        self
    }

    /// Destination for `event`, if the state accepts it.
    pub fn get(&self, event: &E) -> Option<&S> {
        self.table.get(event)
    }

    pub fn accepts(&self, event: &E) -> bool {
        self.table.contains_key(event)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&E, &S)> {
        self.table.iter()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<S: StateId, E: EventId> Default for Events<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateId, E: EventId> FromIterator<(E, S)> for Events<S, E> {
    fn from_iter<I: IntoIterator<Item = (E, S)>>(iter: I) -> Self {
        Self {
            table: iter.into_iter().collect(),
        }
    }
}
