//! Cascade: an action-driven finite state machine engine
//!
//! A machine is declared as data, a set of states, the events each state
//! accepts and where they lead, then driven through a single entry point that
//! is safe to call from many threads at once.
//!
//! # Core Concepts
//!
//! - **Definition**: immutable `States` collection, built once and shared
//! - **Action**: behaviour run on entering a state; returns the next event
//! - **Cascade**: an action's non-noop result is submitted immediately, under
//!   the same lock, so one external event can walk several states atomically
//! - **Errors**: `Rejected` for events the current state does not accept,
//!   `Configuration` for transitions into states that cannot be entered
//!
//! # Example
//!
//! ```rust
//! use cascade_fsm::core::{EventId, EventType, StateType};
//! use cascade_fsm::definition::{Events, State, States};
//! use cascade_fsm::runtime::Machine;
//!
//! let states = States::<StateType, EventType>::new()
//!     .state(StateType::DEFAULT, State::new(Events::new().on("SwitchOff", "Off")))
//!     .state(
//!         "Off",
//!         State::new(Events::new().on("SwitchOn", "On")).with_action(|_: &mut ()| {
//!             println!("The light has been switched off");
//!             Ok(EventType::noop())
//!         }),
//!     )
//!     .state(
//!         "On",
//!         State::new(Events::new().on("SwitchOff", "Off")).with_action(|_: &mut ()| {
//!             println!("The light has been switched on");
//!             Ok(EventType::noop())
//!         }),
//!     );
//!
//! let machine: Machine<StateType, EventType> = Machine::new(states, StateType::DEFAULT);
//!
//! machine.fire("SwitchOff").unwrap();
//! machine.fire("SwitchOn").unwrap();
//! assert!(machine.fire("SwitchOn").unwrap_err().is_rejected());
//! assert_eq!(machine.current(), StateType::from_static("On"));
//! assert_eq!(machine.previous(), StateType::from_static("Off"));
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod definition;
pub mod runtime;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use config::MachineConfig;
pub use crate::core::{EventId, EventType, StateHistory, StateId, StateType, TransitionRecord};
pub use definition::{Action, ActionError, Events, State, States, Terminal};
pub use runtime::{Machine, MachineError, Snapshot, Submission};
