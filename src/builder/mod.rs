//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent machine builder and macros for declaring
//! enum-based state and event identifiers with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::MachineBuilder;
