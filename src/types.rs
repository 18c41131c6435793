//! Core types shared by the game loop and its callers.

use crate::round::RoundReport;

/// The phase the game loop is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    /// Waiting for the start button.
    Idle,

    /// Running the LED countdown and the random pause.
    Countdown,

    /// Target LED lit, waiting for a button.
    RoundActive,

    /// Multiplexing the reaction time until the start button is pressed.
    ShowResult,
}

/// Something observable that happened during a [`step`](crate::ReactionGame::step).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameEvent {
    /// Start button seen in `Idle`.
    CountdownStarted,

    /// Countdown finished, deadline armed and the target LED lit.
    RoundStarted {
        /// Index of the lit LED.
        target: usize,
        /// Time the LED was lit, in microseconds since the time source started.
        start_us: u64,
    },

    /// First wrong button of the round. Later wrong presses add nothing and
    /// are not reported.
    PenaltyApplied {
        /// Index of the wrong button.
        button: usize,
    },

    /// Correct button pressed before the deadline.
    RoundCompleted(RoundReport),

    /// Deadline fired before the correct button was pressed. No result is
    /// shown and any penalty is discarded.
    RoundTimedOut {
        /// Index of the LED that was lit.
        target: usize,
    },

    /// Start button pressed on the result screen; display cleared.
    ResultDismissed,
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Random pause minimum above its maximum.
    InvertedDelayRange { min_us: u32, max_us: u32 },

    /// Round deadline of zero.
    ZeroDeadline,

    /// Multiplexing dwell of zero.
    ZeroDigitDwell,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvertedDelayRange { min_us, max_us } => {
                write!(
                    f,
                    "random delay minimum ({} us) exceeds maximum ({} us)",
                    min_us, max_us
                )
            }
            ConfigError::ZeroDeadline => {
                write!(f, "round deadline must be non-zero")
            }
            ConfigError::ZeroDigitDwell => {
                write!(f, "digit dwell time must be non-zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
