//! Machine that serializes event submission and runs entry actions.

use crate::config::{ConfigError, MachineConfig};
use crate::core::{EventId, StateHistory, StateId, TransitionRecord};
use crate::definition::{ConfigurationDefect, States};
use crate::runtime::error::MachineError;
use chrono::Utc;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, TryLockError};

/// Outcome of a successful submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission<S: StateId> {
    /// State held before the last committed transition
    pub previous: S,
    /// State the machine rests in after the submission
    pub current: S,
    /// Transitions committed by this submission, cascade included
    pub transitions: usize,
}

/// Consistent view of `previous` and `current`, read under one lock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot<S: StateId> {
    pub previous: S,
    pub current: S,
}

struct Cursor<S: StateId, E: EventId> {
    previous: S,
    current: S,
    history: StateHistory<S, E>,
}

/// An action-driven state machine.
///
/// Every submission holds the machine's lock from lookup through the last
/// cascaded action, so concurrent callers are totally ordered and never see a
/// half-applied cascade. Actions must not submit to the machine running them.
///
/// # Example
///
/// ```rust
/// use cascade_fsm::core::{EventType, StateType};
/// use cascade_fsm::definition::{Events, State, States};
/// use cascade_fsm::runtime::Machine;
///
/// let states = States::<StateType, EventType>::new()
///     .state(StateType::DEFAULT, State::new(Events::new().on("SwitchOff", "Off")))
///     .state("Off", State::terminal(Events::new().on("SwitchOn", "On")))
///     .state("On", State::terminal(Events::new().on("SwitchOff", "Off")));
///
/// let machine: Machine<StateType, EventType> = Machine::new(states, StateType::DEFAULT);
///
/// machine.fire("SwitchOff").unwrap();
/// assert_eq!(machine.current(), StateType::from_static("Off"));
///
/// let err = machine.fire("SwitchOff").unwrap_err();
/// assert!(err.is_rejected());
/// assert_eq!(machine.current(), StateType::from_static("Off"));
/// ```
pub struct Machine<S: StateId, E: EventId, C = ()> {
    id: String,
    states: Arc<States<S, E, C>>,
    config: MachineConfig,
    cursor: Mutex<Cursor<S, E>>,
}

impl<S: StateId, E: EventId, C> Machine<S, E, C> {
    /// Create a machine resting in `initial` with the default configuration
    /// and a random id.
    pub fn new(states: impl Into<Arc<States<S, E, C>>>, initial: S) -> Self {
        Self::assemble(
            uuid::Uuid::new_v4().to_string(),
            states.into(),
            initial,
            MachineConfig::default(),
        )
    }

    /// Create a machine with an explicit id and configuration.
    ///
    /// Fails if `config` does not pass [`MachineConfig::validate`].
    pub fn with_config(
        id: impl Into<String>,
        states: impl Into<Arc<States<S, E, C>>>,
        initial: S,
        config: MachineConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::assemble(id.into(), states.into(), initial, config))
    }

    fn assemble(
        id: String,
        states: Arc<States<S, E, C>>,
        initial: S,
        config: MachineConfig,
    ) -> Self {
        let cursor = Cursor {
            previous: initial.clone(),
            current: initial,
            history: StateHistory::with_capacity(config.history_capacity),
        };
        Self {
            id,
            states,
            config,
            cursor: Mutex::new(cursor),
        }
    }

    /// Submit an event and run the resulting cascade to completion.
    ///
    /// The event is resolved against the current state's transition table,
    /// the transition is committed, and the destination's action runs with
    /// `ctx`. While the action returns a non-noop event, that event is resolved
    /// in turn without releasing the lock.
    ///
    /// An error ends the cascade where it occurred. Transitions committed by
    /// earlier steps of the same submission stay committed, so a `Rejected`
    /// or `Configuration` error returned for a cascaded event leaves the
    /// machine in the state whose action produced that event. Only an error
    /// on the submitted event itself guarantees the machine did not move.
    pub fn submit(
        &self,
        event: impl Into<E>,
        ctx: &mut C,
    ) -> Result<Submission<S>, MachineError<S, E>> {
        let mut event = event.into();
        let span = tracing::debug_span!("submit", machine = %self.id, event = event.name());
        let _entered = span.enter();

        let mut cursor = self.lock();
        let mut step = 0usize;

        loop {
            let Some(next) = self.states.resolve(&cursor.current, &event) else {
                tracing::debug!(
                    state = cursor.current.name(),
                    event = event.name(),
                    "Event rejected"
                );
                return Err(MachineError::Rejected {
                    state: cursor.current.clone(),
                    event,
                });
            };

            let action = self.states.get(next).and_then(|state| state.action());
            let Some(action) = action else {
                let defect = self
                    .states
                    .destination_defect(next)
                    .unwrap_or(ConfigurationDefect::MissingAction);
                tracing::error!(
                    from = cursor.current.name(),
                    event = event.name(),
                    to = next.name(),
                    %defect,
                    "Misconfigured transition"
                );
                return Err(MachineError::Configuration {
                    from: cursor.current.clone(),
                    event,
                    to: next.clone(),
                    defect,
                });
            };

            if let Some(limit) = self.config.max_transitions {
                if step >= limit {
                    tracing::warn!(
                        limit,
                        state = cursor.current.name(),
                        event = event.name(),
                        "Cascade limit reached"
                    );
                    return Err(MachineError::CascadeLimit {
                        limit,
                        state: cursor.current.clone(),
                        event,
                    });
                }
            }

            step += 1;
            cursor.previous = std::mem::replace(&mut cursor.current, next.clone());
            let record = TransitionRecord {
                from: cursor.previous.clone(),
                to: next.clone(),
                event,
                step,
                timestamp: Utc::now(),
            };
            cursor.history.record(record);
            tracing::debug!(
                from = cursor.previous.name(),
                to = next.name(),
                step,
                "Transition committed"
            );

            let follow = match action.execute(ctx) {
                Ok(follow) => follow,
                Err(source) => {
                    tracing::warn!(state = next.name(), error = %source, "Action failed");
                    return Err(MachineError::Action {
                        state: next.clone(),
                        source,
                    });
                }
            };

            if follow.is_noop() {
                return Ok(Submission {
                    previous: cursor.previous.clone(),
                    current: cursor.current.clone(),
                    transitions: step,
                });
            }

            tracing::trace!(state = next.name(), event = follow.name(), "Cascading");
            event = follow;
        }
    }

    /// Current state.
    pub fn current(&self) -> S {
        self.lock().current.clone()
    }

    /// State held before the most recent transition.
    pub fn previous(&self) -> S {
        self.lock().previous.clone()
    }

    /// `previous` and `current` read together under one lock.
    pub fn snapshot(&self) -> Snapshot<S> {
        let cursor = self.lock();
        Snapshot {
            previous: cursor.previous.clone(),
            current: cursor.current.clone(),
        }
    }

    /// Copy of the retained transition history.
    pub fn history(&self) -> StateHistory<S, E> {
        self.lock().history.clone()
    }

    /// Whether the current state has a transition for `event`.
    pub fn can_accept(&self, event: &E) -> bool {
        let cursor = self.lock();
        self.states.resolve(&cursor.current, event).is_some()
    }

    /// Events the current state has transitions for, in no particular order.
    pub fn accepted_events(&self) -> Vec<E> {
        let cursor = self.lock();
        self.states
            .get(&cursor.current)
            .map(|state| state.events().iter().map(|(event, _)| event.clone()).collect())
            .unwrap_or_default()
    }

    /// Identifier used in log spans.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Shared definition this machine runs.
    pub fn states(&self) -> &Arc<States<S, E, C>> {
        &self.states
    }

    /// Configuration the machine was created with.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    fn lock(&self) -> MutexGuard<'_, Cursor<S, E>> {
        // A panicking action leaves the cursor consistent: the transition was
        // committed before the action ran.
        self.cursor.lock().unwrap_or_else(|poisoned| {
            tracing::warn!(machine = %self.id, "Recovering machine state after a panicked action");
            self.cursor.clear_poison();
            poisoned.into_inner()
        })
    }
}

impl<S: StateId, E: EventId> Machine<S, E, ()> {
    /// Submit an event to a machine whose actions take no context.
    pub fn fire(&self, event: impl Into<E>) -> Result<Submission<S>, MachineError<S, E>> {
        self.submit(event, &mut ())
    }
}

impl<S: StateId, E: EventId, C> fmt::Debug for Machine<S, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Machine");
        debug.field("id", &self.id);
        // try_lock so formatting from inside an action cannot deadlock
        match self.cursor.try_lock() {
            Ok(cursor) => {
                debug
                    .field("current", &cursor.current)
                    .field("previous", &cursor.previous);
            }
            Err(TryLockError::Poisoned(poisoned)) => {
                let cursor = poisoned.into_inner();
                debug
                    .field("current", &cursor.current)
                    .field("previous", &cursor.previous);
            }
            Err(TryLockError::WouldBlock) => {
                debug.field("current", &format_args!("<locked>"));
            }
        }
        debug.field("states", &self.states.len()).finish()
    }
}
