//! Macros for declaring enum identifiers.

/// Generate a `StateId` implementation for a simple enum.
///
/// The enum derives `Serialize`/`Deserialize`, so the calling crate must
/// depend on `serde`.
///
/// # Example
///
/// ```
/// use cascade_fsm::state_enum;
/// use cascade_fsm::core::StateId;
///
/// state_enum! {
///     pub enum Turnstile {
///         Unset,
///         Locked,
///         Unlocked,
///     }
///     uninitialized: Unset
/// }
///
/// assert!(Turnstile::Unset.is_uninitialized());
/// assert_eq!(Turnstile::Locked.name(), "Locked");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        uninitialized: $uninit:ident $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::StateId for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn uninitialized() -> Self {
                Self::$uninit
            }
        }
    };
}

/// Generate an `EventId` implementation for a simple enum.
///
/// # Example
///
/// ```
/// use cascade_fsm::event_enum;
/// use cascade_fsm::core::EventId;
///
/// event_enum! {
///     pub enum Input {
///         NoOp,
///         Coin,
///         Push,
///     }
///     noop: NoOp
/// }
///
/// assert!(Input::NoOp.is_noop());
/// assert_eq!(Input::Coin.name(), "Coin");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        noop: $noop:ident $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::EventId for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn noop() -> Self {
                Self::$noop
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{EventId, StateId};
    use crate::definition::{Events, State, States};
    use crate::runtime::Machine;

    state_enum! {
        enum Light {
            Unset,
            Off,
            On,
        }
        uninitialized: Unset
    }

    event_enum! {
        enum Switch {
            NoOp,
            SwitchOn,
            SwitchOff,
        }
        noop: NoOp
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(Light::Off.name(), "Off");
        assert!(Light::Unset.is_uninitialized());
        assert!(!Light::On.is_uninitialized());
    }

    #[test]
    fn event_enum_macro_generates_trait() {
        assert_eq!(Switch::SwitchOn.name(), "SwitchOn");
        assert!(Switch::NoOp.is_noop());
        assert!(!Switch::SwitchOff.is_noop());
    }

    #[test]
    fn enum_identifiers_drive_a_machine() {
        let states: States<Light, Switch> = States::new()
            .state(Light::Unset, State::new(Events::new().on(Switch::SwitchOff, Light::Off)))
            .state(Light::Off, State::terminal(Events::new().on(Switch::SwitchOn, Light::On)))
            .state(Light::On, State::terminal(Events::new().on(Switch::SwitchOff, Light::Off)));
        let machine: Machine<Light, Switch> = Machine::new(states, Light::uninitialized());

        machine.fire(Switch::SwitchOff).unwrap();
        machine.fire(Switch::SwitchOn).unwrap();

        assert_eq!(machine.current(), Light::On);
        assert_eq!(machine.previous(), Light::Off);
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                Start,
                Done,
            }
            uninitialized: Start
        }

        assert!(PublicState::Start.is_uninitialized());
    }
}
