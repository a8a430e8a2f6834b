//! Transition history tracking.
//!
//! Machines keep a bounded, in-memory record of the transitions they commit.
//! The oldest records are dropped once the capacity is reached.

use super::state::{EventId, StateId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use cascade_fsm::core::{EventType, StateType, TransitionRecord};
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: StateType::DEFAULT,
///     to: StateType::from_static("Off"),
///     event: EventType::from_static("SwitchOff"),
///     step: 1,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.step, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: StateId, E: EventId> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The event that selected this transition
    pub event: E,
    /// Position within the submission's cascade, starting at 1
    pub step: usize,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered, bounded history of committed transitions.
///
/// # Example
///
/// ```rust
/// use cascade_fsm::core::{EventType, StateHistory, StateType, TransitionRecord};
/// use chrono::Utc;
///
/// let mut history = StateHistory::with_capacity(8);
/// history.record(TransitionRecord {
///     from: StateType::DEFAULT,
///     to: StateType::from_static("Off"),
///     event: EventType::from_static("SwitchOff"),
///     step: 1,
///     timestamp: Utc::now(),
/// });
/// history.record(TransitionRecord {
///     from: StateType::from_static("Off"),
///     to: StateType::from_static("On"),
///     event: EventType::from_static("SwitchOn"),
///     step: 1,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.path();
/// assert_eq!(path.len(), 3); // "" -> Off -> On
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: StateId, E: EventId> {
    capacity: usize,
    transitions: VecDeque<TransitionRecord<S, E>>,
}

impl<S: StateId, E: EventId> StateHistory<S, E> {
    /// Create an empty history holding at most `capacity` records.
    ///
    /// A capacity of zero disables recording.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            transitions: VecDeque::with_capacity(capacity.min(64)),
        }
    }

    /// Record a transition, evicting the oldest ones until it fits.
    pub fn record(&mut self, transition: TransitionRecord<S, E>) {
        if self.capacity == 0 {
            return;
        }
        while self.transitions.len() >= self.capacity {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained record followed by the
    /// `to` state of every record.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the oldest and newest retained records.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Iterate over retained records, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &TransitionRecord<S, E>> {
        self.transitions.iter()
    }

    pub fn last(&self) -> Option<&TransitionRecord<S, E>> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EventType, StateType};

    fn record(
        from: &'static str,
        to: &'static str,
        event: &'static str,
    ) -> TransitionRecord<StateType, EventType> {
        TransitionRecord {
            from: StateType::from_static(from),
            to: StateType::from_static(to),
            event: EventType::from_static(event),
            step: 1,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<StateType, EventType> = StateHistory::with_capacity(4);
        assert!(history.is_empty());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn path_returns_state_sequence() {
        let mut history = StateHistory::with_capacity(4);
        history.record(record("", "Off", "SwitchOff"));
        history.record(record("Off", "On", "SwitchOn"));

        let path: Vec<&str> = history.path().into_iter().map(|s| s.as_str()).collect();
        assert_eq!(path, vec!["", "Off", "On"]);
    }

    #[test]
    fn oldest_records_are_evicted() {
        let mut history = StateHistory::with_capacity(2);
        history.record(record("", "Off", "SwitchOff"));
        history.record(record("Off", "On", "SwitchOn"));
        history.record(record("On", "Off", "SwitchOff"));

        assert_eq!(history.len(), 2);
        let path: Vec<&str> = history.path().into_iter().map(|s| s.as_str()).collect();
        assert_eq!(path, vec!["Off", "On", "Off"]);
    }

    #[test]
    fn overfull_loaded_history_shrinks_to_capacity() {
        let mut history = StateHistory::with_capacity(3);
        history.record(record("", "Off", "SwitchOff"));
        history.record(record("Off", "On", "SwitchOn"));
        history.record(record("On", "Off", "SwitchOff"));

        let mut json = serde_json::to_value(&history).unwrap();
        json["capacity"] = serde_json::json!(1);
        let mut loaded: StateHistory<StateType, EventType> = serde_json::from_value(json).unwrap();
        assert_eq!(loaded.len(), 3);

        loaded.record(record("Off", "On", "SwitchOn"));

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.last().unwrap().to, StateType::from_static("On"));
    }

    #[test]
    fn zero_capacity_disables_recording() {
        let mut history = StateHistory::with_capacity(0);
        history.record(record("", "Off", "SwitchOff"));
        assert!(history.is_empty());
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut history = StateHistory::with_capacity(4);
        history.record(record("", "Off", "SwitchOff"));
        std::thread::sleep(std::time::Duration::from_millis(10));
        history.record(record("Off", "On", "SwitchOn"));

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::with_capacity(4);
        history.record(record("", "Off", "SwitchOff"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<StateType, EventType> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.capacity(), 4);
        assert_eq!(deserialized.last(), history.last());
    }
}
