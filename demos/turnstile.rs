//! Turnstile
//!
//! This example models a coin-operated turnstile with enum identifiers and a
//! context shared by every action.
//!
//! Key concepts:
//! - `state_enum!` / `event_enum!` identifiers
//! - Self transitions (`Coin` while unlocked keeps it unlocked)
//! - Actions recording into a caller-owned context
//!
//! Run with: cargo run --example turnstile

use cascade_fsm::builder::MachineBuilder;
use cascade_fsm::definition::{Events, State, States};
use cascade_fsm::{event_enum, state_enum};

state_enum! {
    enum Gate {
        Unset,
        Locked,
        Unlocked,
    }
    uninitialized: Unset
}

event_enum! {
    enum Input {
        NoOp,
        Install,
        Coin,
        Push,
    }
    noop: NoOp
}

#[derive(Debug, Default)]
struct Till {
    coins: u32,
    passages: u32,
}

fn turnstile() -> States<Gate, Input, Till> {
    States::new()
        .state(Gate::Unset, State::new(Events::new().on(Input::Install, Gate::Locked)))
        .state(
            Gate::Locked,
            State::new(Events::new().on(Input::Coin, Gate::Unlocked).on(Input::Push, Gate::Locked))
                .with_action(|till: &mut Till| {
                    println!("  locked ({} coins, {} passages)", till.coins, till.passages);
                    Ok(Input::NoOp)
                }),
        )
        .state(
            Gate::Unlocked,
            State::new(Events::new().on(Input::Coin, Gate::Unlocked).on(Input::Push, Gate::Locked))
                .with_action(|till: &mut Till| {
                    till.coins += 1;
                    println!("  unlocked, coin accepted");
                    Ok(Input::NoOp)
                }),
        )
}

fn main() {
    println!("=== Turnstile ===\n");

    let machine = MachineBuilder::new(turnstile())
        .id("lock-unlock")
        .strict()
        .build()
        .expect("turnstile definition is well formed");

    let mut till = Till::default();
    for input in [Input::Install, Input::Coin, Input::Coin, Input::Push, Input::Push] {
        if input == Input::Push && machine.current() == Gate::Unlocked {
            till.passages += 1;
        }
        println!("-> {input:?} (current: {:?})", machine.current());
        if let Err(err) = machine.submit(input, &mut till) {
            println!("  {err}");
        }
    }

    println!("\nFinal state: {:?}, till: {till:?}", machine.current());
    println!("\n=== Example Complete ===");
}
