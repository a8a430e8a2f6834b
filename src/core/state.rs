//! Identifier traits for states and events.
//!
//! The engine never inspects identifiers beyond equality, hashing and the two
//! distinguished values defined here: the uninitialized state a machine rests in
//! before its first transition, and the no-op event an action returns to stop
//! a cascade.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state identifiers.
///
/// # Required Traits
///
/// - `Clone` + `Eq` + `Hash`: states key the state collection
/// - `Debug`: states appear in errors and logs
/// - `Serialize` + `Deserialize`: states appear in serializable history
///
/// # Example
///
/// ```rust
/// use cascade_fsm::core::StateId;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Door {
///     Unknown,
///     Open,
///     Closed,
/// }
///
/// impl StateId for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Unknown => "Unknown",
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
///
///     fn uninitialized() -> Self {
///         Self::Unknown
///     }
/// }
///
/// assert!(Door::Unknown.is_uninitialized());
/// assert!(!Door::Open.is_uninitialized());
/// ```
pub trait StateId:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// The state a machine starts in before any transition has occurred.
    fn uninitialized() -> Self;

    /// Check if this is the uninitialized state.
    fn is_uninitialized(&self) -> bool {
        *self == Self::uninitialized()
    }
}

/// Trait for event identifiers.
///
/// Actions return an event after running. Returning [`EventId::noop`] ends the
/// submission; any other event is fed back into the machine.
pub trait EventId:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;

    /// The sentinel meaning "no further transition requested".
    fn noop() -> Self;

    /// Check if this is the no-op sentinel.
    fn is_noop(&self) -> bool {
        *self == Self::noop()
    }
}
