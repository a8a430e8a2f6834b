//! Declarative machine definitions.
//!
//! A definition is plain data: which events each state accepts, where they
//! lead, and what runs on entry. Nothing here mutates once built, so a single
//! `States` value can back any number of machines.
//!
//! # Key Concepts
//!
//! - **Events**: a state's transition table, event to destination
//! - **State**: a transition table plus an optional entry action
//! - **States**: the full collection, keyed by state id
//! - **Action**: behaviour run on entry; returns the next event or the no-op sentinel

mod action;
mod events;
mod state;
mod validate;

pub use action::{Action, ActionError, Terminal};
pub use events::Events;
pub use state::{State, States};
pub use validate::{ConfigurationDefect, DefinitionIssue};
