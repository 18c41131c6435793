//! Per-round state and the report produced when a round completes.

use crate::display::{ReactionDigits, fits_display};
use crate::time::{TimeDuration, TimeInstant};

/// State of the round in progress. Created when the target LED is lit and
/// consumed when the round completes or times out.
#[derive(Debug, Clone, Copy)]
pub struct Round<I: TimeInstant> {
    target: usize,
    started_at: I,
    penalty_us: u64,
    wrong_press: bool,
}

impl<I: TimeInstant> Round<I> {
    /// Starts a round for `target`, timed from `started_at`.
    pub fn new(target: usize, started_at: I) -> Self {
        Self {
            target,
            started_at,
            penalty_us: 0,
            wrong_press: false,
        }
    }

    /// Records a wrong button.
    ///
    /// The penalty is set, not accumulated: any number of wrong presses in a
    /// round cost `penalty_us` once. Returns true only for the first one.
    pub fn record_wrong_press(&mut self, penalty_us: u64) -> bool {
        let first = !self.wrong_press;
        self.wrong_press = true;
        self.penalty_us = penalty_us;
        first
    }

    /// Closes the round at `ended_at`.
    pub fn finish(self, ended_at: I) -> RoundReport {
        RoundReport {
            target: self.target,
            start_us: self.started_at.as_micros(),
            end_us: ended_at.as_micros(),
            elapsed_us: ended_at.duration_since(self.started_at).as_micros(),
            penalty_us: self.penalty_us,
        }
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn started_at(&self) -> I {
        self.started_at
    }

    pub fn penalty_us(&self) -> u64 {
        self.penalty_us
    }

    pub fn had_wrong_press(&self) -> bool {
        self.wrong_press
    }
}

/// Outcome of a completed round.
///
/// Formats as the console line
/// `Start time: <us> us, End time: <us> us, Reaction time: <us> us`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RoundReport {
    target: usize,
    start_us: u64,
    end_us: u64,
    elapsed_us: u64,
    penalty_us: u64,
}

impl RoundReport {
    pub fn target(&self) -> usize {
        self.target
    }

    pub fn start_us(&self) -> u64 {
        self.start_us
    }

    pub fn end_us(&self) -> u64 {
        self.end_us
    }

    /// Time between the LED lighting and the correct press.
    pub fn elapsed_us(&self) -> u64 {
        self.elapsed_us
    }

    pub fn penalty_us(&self) -> u64 {
        self.penalty_us
    }

    /// Elapsed time plus penalty, saturating. This is what the display shows.
    pub fn reaction_us(&self) -> u64 {
        self.elapsed_us.saturating_add(self.penalty_us)
    }

    pub fn digits(&self) -> ReactionDigits {
        ReactionDigits::from_micros(self.reaction_us())
    }

    /// False when the readout wraps (10 s or more, which every penalized
    /// round reaches with the default penalty).
    pub fn fits_display(&self) -> bool {
        fits_display(self.reaction_us())
    }
}

impl core::fmt::Display for RoundReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Start time: {} us, End time: {} us, Reaction time: {} us",
            self.start_us,
            self.end_us,
            self.reaction_us()
        )
    }
}
