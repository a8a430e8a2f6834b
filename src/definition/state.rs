//! State definitions and the state collection.

use super::action::{Action, ActionError, Terminal};
use super::events::Events;
use crate::core::{EventId, StateId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A state's transition table paired with its optional entry action.
///
/// A state without an action may still be used as a source of transitions,
/// but routing an event *into* it is a configuration defect. Use
/// [`State::terminal`] for landing states that intentionally do nothing.
pub struct State<S: StateId, E: EventId, C = ()> {
    events: Events<S, E>,
    action: Option<Arc<dyn Action<C, E>>>,
}

impl<S: StateId, E: EventId, C> State<S, E, C> {
    /// A state with the given transition table and no action.
    pub fn new(events: Events<S, E>) -> Self {
        Self {
            events,
            action: None,
        }
    }

    /// A state whose entry action is [`Terminal`].
    pub fn terminal(events: Events<S, E>) -> Self {
        Self::new(events).with_handler(Terminal)
    }

    /// Bind a closure as the entry action.
    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut C) -> Result<E, ActionError> + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Bind any [`Action`] implementation as the entry action.
    pub fn with_handler<A>(mut self, action: A) -> Self
    where
        A: Action<C, E> + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    pub fn events(&self) -> &Events<S, E> {
        &self.events
    }

    pub fn action(&self) -> Option<&dyn Action<C, E>> {
        self.action.as_deref()
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }
}

impl<S: StateId, E: EventId, C> Clone for State<S, E, C> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
            action: self.action.clone(),
        }
    }
}

impl<S: StateId, E: EventId, C> fmt::Debug for State<S, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("events", &self.events)
            .field("has_action", &self.has_action())
            .finish()
    }
}

/// The complete machine definition: every state keyed by its identifier.
///
/// Built once and never mutated by a running machine.
///
/// # Example
///
/// ```rust
/// use cascade_fsm::core::{EventId, EventType, StateType};
/// use cascade_fsm::definition::{Events, State, States};
///
/// let states = States::<StateType, EventType>::new()
///     .state(StateType::DEFAULT, State::new(Events::new().on("SwitchOff", "Off")))
///     .state(
///         "Off",
///         State::new(Events::new().on("SwitchOn", "On")).with_action(|_: &mut ()| Ok(EventType::noop())),
///     )
///     .state(
///         "On",
///         State::new(Events::new().on("SwitchOff", "Off")).with_action(|_: &mut ()| Ok(EventType::noop())),
///     );
///
/// assert_eq!(states.len(), 3);
/// assert_eq!(
///     states.resolve(&StateType::from_static("Off"), &EventType::from_static("SwitchOn")),
///     Some(&StateType::from_static("On"))
/// );
/// assert!(states.resolve(&StateType::from_static("Off"), &EventType::from_static("SwitchOff")).is_none());
/// ```
pub struct States<S: StateId, E: EventId, C = ()> {
    states: HashMap<S, State<S, E, C>>,
}

impl<S: StateId, E: EventId, C> States<S, E, C> {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Declare a state, replacing any earlier definition with the same id.
    pub fn state(mut self, id: impl Into<S>, definition: State<S, E, C>) -> Self {
        self.states.insert(id.into(), definition);
        self
    }

    pub fn get(&self, id: &S) -> Option<&State<S, E, C>> {
        self.states.get(id)
    }

    pub fn contains(&self, id: &S) -> bool {
        self.states.contains_key(id)
    }

    /// Destination reached from `current` on `event`, without running anything.
    pub fn resolve(&self, current: &S, event: &E) -> Option<&S> {
        self.states.get(current)?.events().get(event)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &State<S, E, C>)> {
        self.states.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<S: StateId, E: EventId, C> Default for States<S, E, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateId, E: EventId, C> Clone for States<S, E, C> {
    fn clone(&self) -> Self {
        Self {
            states: self.states.clone(),
        }
    }
}

impl<S: StateId, E: EventId, C> fmt::Debug for States<S, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.states.iter()).finish()
    }
}

impl<S: StateId, E: EventId, C> FromIterator<(S, State<S, E, C>)> for States<S, E, C> {
    fn from_iter<I: IntoIterator<Item = (S, State<S, E, C>)>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}
