#![allow(dead_code)]

use cascade_fsm::core::{EventId, EventType, StateType};
use cascade_fsm::definition::{Events, State, States};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

pub const OFF: StateType = StateType::from_static("Off");
pub const ON: StateType = StateType::from_static("On");
pub const SWITCH_OFF: EventType = EventType::from_static("SwitchOff");
pub const SWITCH_ON: EventType = EventType::from_static("SwitchOn");

static TRACING: Once = Once::new();

/// Route engine logs through the test harness. Honors `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// The canonical two-state toggle, entered from the default state by `SwitchOff`.
pub fn lightswitch() -> States<StateType, EventType> {
    States::new()
        .state(StateType::DEFAULT, State::new(Events::new().on(SWITCH_OFF, OFF)))
        .state(
            OFF,
            State::new(Events::new().on(SWITCH_ON, ON)).with_action(|_: &mut ()| {
                tracing::info!("The light has been switched off");
                Ok(EventType::noop())
            }),
        )
        .state(
            ON,
            State::new(Events::new().on(SWITCH_OFF, OFF)).with_action(|_: &mut ()| {
                tracing::info!("The light has been switched on");
                Ok(EventType::noop())
            }),
        )
}

/// Reference model of the toggle: the destination, if the event is accepted.
pub fn toggle_model(current: &StateType, event: &EventType) -> Option<StateType> {
    match (current.as_str(), event.as_str()) {
        ("", "SwitchOff") | ("On", "SwitchOff") => Some(OFF),
        ("Off", "SwitchOn") => Some(ON),
        _ => None,
    }
}
