//! Game timing configuration.

use crate::types::ConfigError;

/// Timing parameters for the game.
///
/// [`GameConfig::default`] gives the stock board timings: 2 s countdown
/// stages, a 1-10 s random pause, a 10 s round deadline, a 10 s wrong-press
/// penalty, 1 ms per multiplexed digit and no debounce filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameConfig {
    countdown_stage_us: u32,
    random_delay_min_us: u32,
    random_delay_max_us: u32,
    deadline_us: u32,
    penalty_us: u64,
    digit_dwell_us: u32,
    debounce_us: u32,
}

impl GameConfig {
    /// Stock board timings.
    pub const DEFAULT: Self = Self {
        countdown_stage_us: 2_000_000,
        random_delay_min_us: 1_000_000,
        random_delay_max_us: 10_000_000,
        deadline_us: 10_000_000,
        penalty_us: 10_000_000,
        digit_dwell_us: 1_000,
        debounce_us: 0,
    };

    /// Creates a configuration with the default timings.
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets how long each countdown stage is held.
    pub fn with_countdown_stage(mut self, micros: u32) -> Self {
        self.countdown_stage_us = micros;
        self
    }

    /// Sets the inclusive range of the random pause after the countdown.
    ///
    /// # Errors
    /// * `InvertedDelayRange` - `min_us` is greater than `max_us`
    pub fn with_random_delay(mut self, min_us: u32, max_us: u32) -> Result<Self, ConfigError> {
        if min_us > max_us {
            return Err(ConfigError::InvertedDelayRange { min_us, max_us });
        }
        self.random_delay_min_us = min_us;
        self.random_delay_max_us = max_us;
        Ok(self)
    }

    /// Sets how long a round waits for the correct button.
    ///
    /// # Errors
    /// * `ZeroDeadline` - `micros` is zero
    pub fn with_deadline(mut self, micros: u32) -> Result<Self, ConfigError> {
        if micros == 0 {
            return Err(ConfigError::ZeroDeadline);
        }
        self.deadline_us = micros;
        Ok(self)
    }

    /// Sets the time added to a round in which a wrong button was pressed.
    pub fn with_penalty(mut self, micros: u64) -> Self {
        self.penalty_us = micros;
        self
    }

    /// Sets how long each digit stays selected while multiplexing.
    ///
    /// # Errors
    /// * `ZeroDigitDwell` - `micros` is zero
    pub fn with_digit_dwell(mut self, micros: u32) -> Result<Self, ConfigError> {
        if micros == 0 {
            return Err(ConfigError::ZeroDigitDwell);
        }
        self.digit_dwell_us = micros;
        Ok(self)
    }

    /// Sets the debounce window for all buttons. Zero reads buttons raw.
    pub fn with_debounce(mut self, micros: u32) -> Self {
        self.debounce_us = micros;
        self
    }

    pub fn countdown_stage_us(&self) -> u32 {
        self.countdown_stage_us
    }

    pub fn random_delay_min_us(&self) -> u32 {
        self.random_delay_min_us
    }

    pub fn random_delay_max_us(&self) -> u32 {
        self.random_delay_max_us
    }

    pub fn deadline_us(&self) -> u32 {
        self.deadline_us
    }

    pub fn penalty_us(&self) -> u64 {
        self.penalty_us
    }

    pub fn digit_dwell_us(&self) -> u32 {
        self.digit_dwell_us
    }

    pub fn debounce_us(&self) -> u32 {
        self.debounce_us
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
