//! Hardware abstraction traits for the game board.
//!
//! Implement these for your GPIO, alarm and delay peripherals to let
//! [`ReactionGame`](crate::ReactionGame) drive them. None of the methods can
//! fail: implementations handle hardware errors internally.

use embedded_hal::delay::DelayNs;

/// Number of status LEDs, which is also the number of reaction buttons.
pub const LED_COUNT: usize = 3;

/// Number of digits on the multiplexed display.
pub const DIGIT_COUNT: usize = 4;

/// Number of segments per digit (a through g, no decimal point).
pub const SEGMENT_COUNT: usize = 7;

/// On/off state for segments a..g, in that order.
pub type SegmentPattern = [bool; SEGMENT_COUNT];

/// The three status LEDs used for the countdown and as round targets.
pub trait StatusLeds {
    /// Drives LED `index` on or off. Indices outside `0..LED_COUNT` are ignored.
    fn set_led(&mut self, index: usize, on: bool);

    /// Turns every status LED off.
    fn all_off(&mut self) {
        for index in 0..LED_COUNT {
            self.set_led(index, false);
        }
    }
}

/// Start button plus one reaction button per status LED.
///
/// Buttons are pulled down, so a pressed button reads high.
pub trait ButtonPanel {
    /// Returns true while the start button is held.
    fn is_start_pressed(&mut self) -> bool;

    /// Returns true while reaction button `index` is held.
    fn is_button_pressed(&mut self, index: usize) -> bool;
}

/// A multiplexed 7-segment display: one shared set of segment lines and one
/// select line per digit.
pub trait SegmentDisplay {
    /// Drives the select line of digit `position`.
    fn set_digit_select(&mut self, position: usize, on: bool);

    /// Drives the shared segment lines.
    fn set_segments(&mut self, pattern: &SegmentPattern);

    /// Enables digit `position` and disables all others.
    fn select_only(&mut self, position: usize) {
        for digit in 0..DIGIT_COUNT {
            self.set_digit_select(digit, digit == position);
        }
    }

    /// Enables every digit.
    fn enable_all(&mut self) {
        for digit in 0..DIGIT_COUNT {
            self.set_digit_select(digit, true);
        }
    }

    /// Disables every digit and turns all segments off.
    fn clear(&mut self) {
        for digit in 0..DIGIT_COUNT {
            self.set_digit_select(digit, false);
        }
        self.set_segments(&[false; SEGMENT_COUNT]);
    }
}

/// One-shot alarm that fires the round deadline.
///
/// When the alarm expires the implementation must call
/// [`DeadlineFlag::fire`](crate::DeadlineFlag::fire) on the flag shared with
/// the game, typically from an interrupt handler.
pub trait DeadlineAlarm {
    /// Schedules the alarm `after_us` microseconds from now, replacing any
    /// pending schedule.
    fn arm(&mut self, after_us: u32);

    /// Cancels a pending alarm. Does nothing if none is pending.
    fn cancel(&mut self);
}

/// Everything the game drives directly: LEDs, buttons, display and a
/// busy-wait delay.
pub trait Board: StatusLeds + ButtonPanel + SegmentDisplay + DelayNs {}

impl<T> Board for T where T: StatusLeds + ButtonPanel + SegmentDisplay + DelayNs {}
