//! Entry actions.

use crate::core::EventId;

/// Error type returned by failing actions.
///
/// The engine never inspects it; it is handed back to the caller unchanged.
pub type ActionError = Box<dyn std::error::Error + Send + Sync>;

/// Behaviour executed whenever a machine enters a state.
///
/// The returned event decides what happens next: [`EventId::noop`] ends the
/// submission, anything else is submitted to the machine before the lock is
/// released.
///
/// Closures of the shape `Fn(&mut C) -> Result<E, ActionError>` implement this
/// trait.
///
/// # Example
///
/// ```rust
/// use cascade_fsm::core::{EventId, EventType};
/// use cascade_fsm::definition::{Action, ActionError};
///
/// struct Announce;
///
/// impl Action<Vec<String>, EventType> for Announce {
///     fn execute(&self, log: &mut Vec<String>) -> Result<EventType, ActionError> {
///         log.push("entered".to_string());
///         Ok(EventType::noop())
///     }
/// }
///
/// let mut log = Vec::new();
/// let next = Announce.execute(&mut log).unwrap();
/// assert!(next.is_noop());
/// assert_eq!(log, vec!["entered"]);
/// ```
pub trait Action<C, E>: Send + Sync {
    fn execute(&self, ctx: &mut C) -> Result<E, ActionError>;
}

impl<C, E, F> Action<C, E> for F
where
    F: Fn(&mut C) -> Result<E, ActionError> + Send + Sync,
{
    fn execute(&self, ctx: &mut C) -> Result<E, ActionError> {
        self(ctx)
    }
}

/// Action for states that are entered deliberately without doing anything.
///
/// A destination state with no action at all is a configuration defect; bind
/// `Terminal` to mark an intentionally empty landing state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Terminal;

impl<C, E: EventId> Action<C, E> for Terminal {
    fn execute(&self, _ctx: &mut C) -> Result<E, ActionError> {
        Ok(E::noop())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EventType;

    #[test]
    fn terminal_returns_noop() {
        let next: EventType = Terminal.execute(&mut ()).unwrap();
        assert!(next.is_noop());
    }

    #[test]
    fn closures_are_actions() {
        let action = |count: &mut u32| -> Result<EventType, ActionError> {
            *count += 1;
            Ok(EventType::from_static("Again"))
        };

        let mut count = 0;
        let next = action.execute(&mut count).unwrap();
        assert_eq!(next, EventType::from_static("Again"));
        assert_eq!(count, 1);
    }

    #[test]
    fn closure_errors_pass_through() {
        let action = |_: &mut ()| -> Result<EventType, ActionError> { Err("sensor offline".into()) };

        let err = action.execute(&mut ()).unwrap_err();
        assert_eq!(err.to_string(), "sensor offline");
    }
}
