//! Time abstraction traits for platform-agnostic timing.
//!
//! All game timing is expressed in microseconds, matching the resolution of
//! the hardware timers the game runs on.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to microseconds.
    fn as_micros(&self) -> u64;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Microseconds since the time source started counting.
    fn as_micros(&self) -> u64;
}
