//! Light Switch
//!
//! This example drives the canonical two-state toggle.
//!
//! Key concepts:
//! - String identifiers with an uninitialized default state
//! - Entry actions that print and stop the cascade
//! - Rejection as ordinary control flow (switching off a light that is off)
//!
//! Run with: RUST_LOG=debug cargo run --example lightswitch

use cascade_fsm::core::{EventId, EventType, StateType};
use cascade_fsm::definition::{Events, State, States};
use cascade_fsm::runtime::Machine;
use tracing_subscriber::EnvFilter;

const OFF: StateType = StateType::from_static("Off");
const ON: StateType = StateType::from_static("On");
const SWITCH_OFF: EventType = EventType::from_static("SwitchOff");
const SWITCH_ON: EventType = EventType::from_static("SwitchOn");

fn lightswitch() -> States<StateType, EventType> {
    States::new()
        .state(StateType::DEFAULT, State::new(Events::new().on(SWITCH_OFF, OFF)))
        .state(
            OFF,
            State::new(Events::new().on(SWITCH_ON, ON)).with_action(|_: &mut ()| {
                println!("  The light has been switched off");
                Ok(EventType::noop())
            }),
        )
        .state(
            ON,
            State::new(Events::new().on(SWITCH_OFF, OFF)).with_action(|_: &mut ()| {
                println!("  The light has been switched on");
                Ok(EventType::noop())
            }),
        )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Light Switch ===\n");

    let machine: Machine<StateType, EventType> = Machine::new(lightswitch(), StateType::DEFAULT);

    for event in [SWITCH_OFF, SWITCH_OFF, SWITCH_ON, SWITCH_ON, SWITCH_OFF] {
        println!("-> {event}");
        match machine.fire(event) {
            Ok(submission) => println!(
                "  now {} (was {})",
                submission.current, submission.previous
            ),
            Err(err) if err.is_rejected() => println!("  ignored: {err}"),
            Err(err) => {
                eprintln!("  failed: {err}");
                return;
            }
        }
    }

    println!("\nFinal state: {}", machine.current());
    println!("\n=== Example Complete ===");
}
