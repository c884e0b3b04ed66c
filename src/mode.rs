//! Lifecycle phase of a coupling instance.

use std::fmt::Display;

/// FMI-style lifecycle phases of a coupling unit: one-time setup, parameter
/// initialization, discrete-event handling and continuous-time integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Instantiation,
    Initialization,
    Event,
    ContinuousTime,
}

impl Mode {
    /// Whether `next` may follow `self` in the coupling-unit lifecycle.
    ///
    /// Allowed: `Instantiation -> Initialization -> Event <-> ContinuousTime`,
    /// plus re-setting the current phase. There is no way back to
    /// `Instantiation`.
    pub fn can_transition_to(self, next: Mode) -> bool {
        use Mode::*;
        self == next
            || matches!(
                (self, next),
                (Instantiation, Initialization)
                    | (Initialization, Event)
                    | (Event, ContinuousTime)
                    | (ContinuousTime, Event)
            )
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Instantiation => write!(f, "instantiation"),
            Mode::Initialization => write!(f, "initialization"),
            Mode::Event => write!(f, "event"),
            Mode::ContinuousTime => write!(f, "continuous"),
        }
    }
}
