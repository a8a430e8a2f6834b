//! Core identifier types and history.
//!
//! This module contains the vocabulary shared by definitions and the runtime:
//! - State and event identifiers via the `StateId` and `EventId` traits
//! - String-backed identifiers `StateType` and `EventType`
//! - Bounded transition history

mod history;
mod state;
mod token;

pub use history::{StateHistory, TransitionRecord};
pub use state::{EventId, StateId};
pub use token::{EventType, StateType};
