use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin, PinState};
use reaction_timer::{
    ButtonPanel, DIGIT_COUNT, LED_COUNT, SEGMENT_COUNT, SegmentDisplay, SegmentPattern, StatusLeds,
};

/// GPIO numbers of the reaction timer board
pub struct PinMap;

impl PinMap {
    /// Digit select transistors, leftmost digit first
    pub const DIGIT_SELECT: [u8; DIGIT_COUNT] = [0, 1, 2, 3];
    /// Segments a..g
    pub const SEGMENTS: [u8; SEGMENT_COUNT] = [4, 5, 6, 7, 8, 9, 10];
    pub const LEDS: [u8; LED_COUNT] = [16, 17, 18];
    /// Reaction buttons, one per LED, pulled down
    pub const BUTTONS: [u8; LED_COUNT] = [19, 20, 21];
    /// Start button, pulled down
    pub const START: u8 = 22;
}

/// Reaction timer board built from plain GPIO pins
///
/// This wrapper implements the board traits required by the game on top of
/// embedded-hal pins and delay. Pin errors are ignored; the game treats all
/// GPIO access as infallible.
pub struct GpioBoard<O, I, D>
where
    O: OutputPin,
    I: InputPin,
    D: DelayNs,
{
    digit_select: [O; DIGIT_COUNT],
    segments: [O; SEGMENT_COUNT],
    leds: [O; LED_COUNT],
    buttons: [I; LED_COUNT],
    start: I,
    delay: D,
}

impl<O, I, D> GpioBoard<O, I, D>
where
    O: OutputPin,
    I: InputPin,
    D: DelayNs,
{
    /// Create a new board
    ///
    /// # Arguments
    /// * `digit_select` - Digit select outputs, in `PinMap::DIGIT_SELECT` order
    /// * `segments` - Segment outputs a..g
    /// * `leds` - Status LED outputs
    /// * `buttons` - Reaction button inputs, matching `leds`
    /// * `start` - Start button input
    /// * `delay` - Busy-wait delay provider
    pub fn new(
        digit_select: [O; DIGIT_COUNT],
        segments: [O; SEGMENT_COUNT],
        leds: [O; LED_COUNT],
        buttons: [I; LED_COUNT],
        start: I,
        delay: D,
    ) -> Self {
        Self {
            digit_select,
            segments,
            leds,
            buttons,
            start,
            delay,
        }
    }
}

impl<O, I, D> StatusLeds for GpioBoard<O, I, D>
where
    O: OutputPin,
    I: InputPin,
    D: DelayNs,
{
    fn set_led(&mut self, index: usize, on: bool) {
        if let Some(led) = self.leds.get_mut(index) {
            let _ = led.set_state(PinState::from(on));
        }
    }
}

impl<O, I, D> ButtonPanel for GpioBoard<O, I, D>
where
    O: OutputPin,
    I: InputPin,
    D: DelayNs,
{
    fn is_start_pressed(&mut self) -> bool {
        self.start.is_high().unwrap_or(false)
    }

    fn is_button_pressed(&mut self, index: usize) -> bool {
        self.buttons
            .get_mut(index)
            .is_some_and(|button| button.is_high().unwrap_or(false))
    }
}

impl<O, I, D> SegmentDisplay for GpioBoard<O, I, D>
where
    O: OutputPin,
    I: InputPin,
    D: DelayNs,
{
    fn set_digit_select(&mut self, position: usize, on: bool) {
        if let Some(select) = self.digit_select.get_mut(position) {
            let _ = select.set_state(PinState::from(on));
        }
    }

    fn set_segments(&mut self, pattern: &SegmentPattern) {
        for (segment, &on) in self.segments.iter_mut().zip(pattern.iter()) {
            let _ = segment.set_state(PinState::from(on));
        }
    }
}

impl<O, I, D> DelayNs for GpioBoard<O, I, D>
where
    O: OutputPin,
    I: InputPin,
    D: DelayNs,
{
    fn delay_ns(&mut self, ns: u32) {
        self.delay.delay_ns(ns);
    }

    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
