//! Machine runtime.
//!
//! A [`Machine`] wraps an immutable [`States`](crate::definition::States)
//! definition with the mutable `previous`/`current` pair and the lock that
//! serializes submissions.
//!
//! # Submission
//!
//! - **Resolve**: look up the event in the current state's transition table
//! - **Commit**: move `current` to the destination and record the transition
//! - **Act**: run the destination's action with the caller's context
//! - **Cascade**: feed a non-noop result back in without releasing the lock

mod error;
mod machine;

pub use error::MachineError;
pub use machine::{Machine, Snapshot, Submission};
