//! Digit decomposition and multiplexing for the 4-digit 7-segment readout.
//!
//! The readout shows one seconds digit followed by three millisecond digits.
//! Reaction times of 10 s or more wrap the seconds digit; see
//! [`fits_display`].

use crate::hardware::{DIGIT_COUNT, SegmentDisplay, SegmentPattern};

/// Largest reaction time (exclusive) the readout can show without wrapping.
pub const DISPLAY_LIMIT_US: u64 = 10_000_000;

/// Segment patterns (a..g) for digits 0-9.
pub const DIGIT_SEGMENTS: [SegmentPattern; 10] = [
    [true, true, true, true, true, true, false],    // 0
    [false, true, true, false, false, false, false], // 1
    [true, true, false, true, true, false, true],   // 2
    [true, true, true, true, false, false, true],   // 3
    [false, true, true, false, false, true, true],  // 4
    [true, false, true, true, false, true, true],   // 5
    [true, false, true, true, true, true, true],    // 6
    [true, true, true, false, false, false, false], // 7
    [true, true, true, true, true, true, true],     // 8
    [true, true, true, true, false, true, true],    // 9
];

/// Returns the segment pattern for `digit`, taken modulo 10.
#[inline]
pub fn segments_for(digit: u8) -> SegmentPattern {
    DIGIT_SEGMENTS[(digit % 10) as usize]
}

/// Returns true if `micros` is shown without the seconds digit wrapping.
#[inline]
pub fn fits_display(micros: u64) -> bool {
    micros < DISPLAY_LIMIT_US
}

/// The four digits shown for a reaction time, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReactionDigits([u8; DIGIT_COUNT]);

impl ReactionDigits {
    /// Splits a time in microseconds into `[seconds % 10, ms hundreds, ms tens, ms units]`.
    pub const fn from_micros(micros: u64) -> Self {
        let seconds = micros / 1_000_000;
        let millis = (micros / 1_000) % 1_000;

        Self([
            (seconds % 10) as u8,
            (millis / 100 % 10) as u8,
            (millis / 10 % 10) as u8,
            (millis % 10) as u8,
        ])
    }

    /// Returns all four digits.
    pub fn digits(&self) -> [u8; DIGIT_COUNT] {
        self.0
    }

    /// Returns the digit at `position` (0 is leftmost).
    pub fn digit(&self, position: usize) -> u8 {
        self.0[position % DIGIT_COUNT]
    }
}

/// Cycles through the digits of a readout, one digit per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Multiplexer {
    digits: ReactionDigits,
    position: usize,
}

impl Multiplexer {
    pub fn new(digits: ReactionDigits) -> Self {
        Self { digits, position: 0 }
    }

    /// Selects the next digit and drives its segments.
    ///
    /// The select line is switched before the segments, so the previous
    /// pattern is briefly visible on the new digit.
    pub fn show_next<S: SegmentDisplay + ?Sized>(&mut self, display: &mut S) {
        display.select_only(self.position);
        display.set_segments(&segments_for(self.digits.digit(self.position)));
        self.position = (self.position + 1) % DIGIT_COUNT;
    }

    /// Position of the digit the next [`show_next`](Self::show_next) will drive.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn digits(&self) -> ReactionDigits {
        self.digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::SEGMENT_COUNT;

    struct RecordingDisplay {
        selected: [bool; DIGIT_COUNT],
        segments: SegmentPattern,
    }

    impl SegmentDisplay for RecordingDisplay {
        fn set_digit_select(&mut self, position: usize, on: bool) {
            self.selected[position] = on;
        }

        fn set_segments(&mut self, pattern: &SegmentPattern) {
            self.segments = *pattern;
        }
    }

    #[test]
    fn decomposes_sub_second_time() {
        assert_eq!(ReactionDigits::from_micros(250_000).digits(), [0, 2, 5, 0]);
        assert_eq!(ReactionDigits::from_micros(1_234_999).digits(), [1, 2, 3, 4]);
        assert_eq!(ReactionDigits::from_micros(0).digits(), [0, 0, 0, 0]);
    }

    #[test]
    fn seconds_digit_wraps_past_display_limit() {
        // 10.25 s shows as 0.250
        let digits = ReactionDigits::from_micros(10_250_000);
        assert_eq!(digits.digits(), [0, 2, 5, 0]);
        assert!(!fits_display(10_250_000));
        assert!(fits_display(9_999_999));
    }

    #[test]
    fn digit_patterns_light_expected_segment_counts() {
        let lit: [usize; 10] = core::array::from_fn(|d| {
            DIGIT_SEGMENTS[d].iter().filter(|&&on| on).count()
        });
        assert_eq!(lit, [6, 2, 5, 5, 4, 5, 6, 3, 7, 6]);
        assert_eq!(segments_for(18), DIGIT_SEGMENTS[8]);
    }

    #[test]
    fn multiplexer_cycles_through_positions() {
        let mut display = RecordingDisplay {
            selected: [false; DIGIT_COUNT],
            segments: [false; SEGMENT_COUNT],
        };
        let mut mux = Multiplexer::new(ReactionDigits::from_micros(1_870_000));

        mux.show_next(&mut display);
        assert_eq!(display.selected, [true, false, false, false]);
        assert_eq!(display.segments, DIGIT_SEGMENTS[1]);

        mux.show_next(&mut display);
        assert_eq!(display.selected, [false, true, false, false]);
        assert_eq!(display.segments, DIGIT_SEGMENTS[8]);

        mux.show_next(&mut display);
        mux.show_next(&mut display);
        assert_eq!(display.selected, [false, false, false, true]);
        assert_eq!(display.segments, DIGIT_SEGMENTS[0]);
        assert_eq!(mux.position(), 0);
    }
}
