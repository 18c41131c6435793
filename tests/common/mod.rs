//! Shared test infrastructure for reaction-timer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;

use embedded_hal::delay::DelayNs;
use heapless::Vec;
use rand_core::RngCore;
use reaction_timer::{
    ButtonPanel, DIGIT_COUNT, DIGIT_SEGMENTS, DeadlineAlarm, DeadlineFlag, GameConfig, GameEvent,
    LED_COUNT, ReactionGame, SEGMENT_COUNT, SegmentDisplay, SegmentPattern, StatusLeds,
    TimeDuration, TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps microseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_micros(&self) -> u64 {
        self.0
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }

    fn as_micros(&self) -> u64 {
        self.0
    }
}

// ============================================================================
// Simulated Clock
// ============================================================================

/// Time charged for every button read, so polling loops make progress
pub const POLL_COST_US: u64 = 10;

/// Simulated clock that also plays the alarm peripheral: once time passes the
/// scheduled deadline it fires the owned flag, like the interrupt would.
pub struct SimClock {
    now: Cell<u64>,
    deadline_at: Cell<Option<u64>>,
    flag: DeadlineFlag,
}

impl SimClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(0),
            deadline_at: Cell::new(None),
            flag: DeadlineFlag::new(),
        }
    }

    /// Advance time, firing the deadline if it is passed
    pub fn advance(&self, micros: u64) {
        let now = self.now.get() + micros;
        self.now.set(now);

        if let Some(at) = self.deadline_at.get() {
            if now >= at {
                self.deadline_at.set(None);
                self.flag.fire();
            }
        }
    }

    pub fn now_us(&self) -> u64 {
        self.now.get()
    }

    pub fn flag(&self) -> &DeadlineFlag {
        &self.flag
    }

    /// Absolute time the pending alarm will fire at, if one is scheduled
    pub fn pending_deadline(&self) -> Option<u64> {
        self.deadline_at.get()
    }
}

impl TimeSource<TestInstant> for SimClock {
    fn now(&self) -> TestInstant {
        TestInstant(self.now.get())
    }
}

// ============================================================================
// Mock Alarm
// ============================================================================

/// Alarm that schedules on the simulated clock and counts calls
pub struct SimAlarm<'c> {
    clock: &'c SimClock,
    pub arm_count: u32,
    pub cancel_count: u32,
}

impl<'c> SimAlarm<'c> {
    pub fn new(clock: &'c SimClock) -> Self {
        Self {
            clock,
            arm_count: 0,
            cancel_count: 0,
        }
    }
}

impl DeadlineAlarm for SimAlarm<'_> {
    fn arm(&mut self, after_us: u32) {
        self.arm_count += 1;
        self.clock
            .deadline_at
            .set(Some(self.clock.now_us() + u64::from(after_us)));
    }

    fn cancel(&mut self) {
        self.cancel_count += 1;
        self.clock.deadline_at.set(None);
    }
}

// ============================================================================
// Mock Board
// ============================================================================

/// Physical inputs on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Start,
    Button(usize),
}

/// A scripted press: `input` reads high for `from_us <= now < until_us`
#[derive(Debug, Clone, Copy)]
pub struct Press {
    pub input: Input,
    pub from_us: u64,
    pub until_us: u64,
}

/// Board that reads scripted presses and records outputs
pub struct SimBoard<'c> {
    clock: &'c SimClock,
    presses: Vec<Press, 16>,
    pub leds: [bool; LED_COUNT],
    pub digit_select: [bool; DIGIT_COUNT],
    pub segments: SegmentPattern,
    /// Last pattern driven while exactly one digit was selected
    pub shown: [Option<SegmentPattern>; DIGIT_COUNT],
    /// LED state at the start of every delay of 100 ms or more
    pub led_snapshots: Vec<[bool; LED_COUNT], 16>,
    /// Every delay of 100 ms or more, in microseconds
    pub long_delays: Vec<u32, 16>,
}

impl<'c> SimBoard<'c> {
    pub fn new(clock: &'c SimClock) -> Self {
        Self {
            clock,
            presses: Vec::new(),
            leds: [false; LED_COUNT],
            digit_select: [false; DIGIT_COUNT],
            segments: [false; SEGMENT_COUNT],
            shown: [None; DIGIT_COUNT],
            led_snapshots: Vec::new(),
            long_delays: Vec::new(),
        }
    }

    /// Schedule a press of `input` between two absolute times
    pub fn press(&mut self, input: Input, from_us: u64, until_us: u64) {
        self.presses
            .push(Press {
                input,
                from_us,
                until_us,
            })
            .expect("press script full");
    }

    /// Digits recovered from the patterns shown on each position
    pub fn shown_digits(&self) -> [Option<u8>; DIGIT_COUNT] {
        core::array::from_fn(|position| {
            self.shown[position].and_then(|pattern| {
                DIGIT_SEGMENTS
                    .iter()
                    .position(|digit| *digit == pattern)
                    .map(|digit| digit as u8)
            })
        })
    }

    pub fn is_display_dark(&self) -> bool {
        self.digit_select.iter().all(|on| !on) && self.segments.iter().all(|on| !on)
    }

    fn is_held(&self, input: Input) -> bool {
        let now = self.clock.now_us();
        self.presses
            .iter()
            .any(|p| p.input == input && p.from_us <= now && now < p.until_us)
    }
}

impl StatusLeds for SimBoard<'_> {
    fn set_led(&mut self, index: usize, on: bool) {
        if let Some(led) = self.leds.get_mut(index) {
            *led = on;
        }
    }
}

impl ButtonPanel for SimBoard<'_> {
    fn is_start_pressed(&mut self) -> bool {
        self.clock.advance(POLL_COST_US);
        self.is_held(Input::Start)
    }

    fn is_button_pressed(&mut self, index: usize) -> bool {
        self.clock.advance(POLL_COST_US);
        self.is_held(Input::Button(index))
    }
}

impl SegmentDisplay for SimBoard<'_> {
    fn set_digit_select(&mut self, position: usize, on: bool) {
        self.digit_select[position] = on;
    }

    fn set_segments(&mut self, pattern: &SegmentPattern) {
        self.segments = *pattern;

        let mut selected = self.digit_select.iter().enumerate().filter(|(_, on)| **on);
        if let (Some((position, _)), None) = (selected.next(), selected.next()) {
            self.shown[position] = Some(*pattern);
        }
    }
}

impl DelayNs for SimBoard<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.advance(u64::from(ns).div_ceil(1_000));
    }

    fn delay_us(&mut self, us: u32) {
        if us >= 100_000 {
            let _ = self.led_snapshots.push(self.leds);
            let _ = self.long_delays.push(us);
        }
        self.clock.advance(u64::from(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay_us(ms.saturating_mul(1_000));
    }
}

// ============================================================================
// Scripted Random Source
// ============================================================================

/// Random source that replays a fixed list of values, cycling
pub struct ScriptedRng {
    values: Vec<u64, 16>,
    index: usize,
}

impl ScriptedRng {
    pub fn new(values: &[u64]) -> Self {
        Self {
            values: Vec::from_slice(values).expect("too many scripted values"),
            index: 0,
        }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub type SimGame<'c> = ReactionGame<'c, TestInstant, SimClock, SimBoard<'c>, ScriptedRng, SimAlarm<'c>>;

/// Build a game on the simulated board
pub fn sim_game<'c>(clock: &'c SimClock, rng: &[u64], config: GameConfig) -> SimGame<'c> {
    ReactionGame::new(
        SimBoard::new(clock),
        clock,
        ScriptedRng::new(rng),
        SimAlarm::new(clock),
        clock.flag(),
        config,
    )
}

/// Step until `done` accepts an event, collecting every event seen.
///
/// Panics if `max_steps` pass without a match.
pub fn step_until<F>(game: &mut SimGame<'_>, max_steps: usize, mut done: F) -> std::vec::Vec<GameEvent>
where
    F: FnMut(&GameEvent) -> bool,
{
    let mut events = std::vec::Vec::new();
    for _ in 0..max_steps {
        if let Some(event) = game.step() {
            events.push(event);
            if done(&event) {
                return events;
            }
        }
    }
    panic!("no matching event within {} steps, saw {:?}", max_steps, events);
}

/// Press start and run the countdown; returns `(target, start_us)` of the new round.
pub fn start_round(game: &mut SimGame<'_>, clock: &SimClock) -> (usize, u64) {
    let now = clock.now_us();
    game.board_mut().press(Input::Start, now, now + 1_000);

    let events = step_until(game, 1_000, |e| matches!(e, GameEvent::RoundStarted { .. }));
    match events.last() {
        Some(GameEvent::RoundStarted { target, start_us }) => (*target, *start_us),
        other => panic!("unexpected event {:?}", other),
    }
}
