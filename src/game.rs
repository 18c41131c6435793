//! The reaction game state machine.
//!
//! Provides [`ReactionGame`], which owns the board and walks through
//! `Idle -> Countdown -> RoundActive -> ShowResult -> Idle`, one
//! [`step`](ReactionGame::step) at a time. All waiting is done by polling or
//! by the board's busy-wait delay, so a fake board and clock are enough to
//! drive it in tests.

use embedded_hal::delay::DelayNs;
use rand_core::RngCore;

use crate::config::GameConfig;
use crate::deadline::DeadlineFlag;
use crate::debounce::Debouncer;
use crate::display::Multiplexer;
use crate::hardware::{
    Board, ButtonPanel, DIGIT_COUNT, DeadlineAlarm, LED_COUNT, SegmentDisplay, StatusLeds,
};
use crate::round::{Round, RoundReport};
use crate::time::{TimeInstant, TimeSource};
use crate::types::{GameEvent, GameState};

/// Running totals since the game was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameStats {
    pub rounds_started: u32,
    pub rounds_completed: u32,
    pub rounds_timed_out: u32,
    pub penalized_rounds: u32,
    /// Fastest reaction time seen, penalty included, in microseconds.
    pub best_reaction_us: Option<u64>,
}

impl GameStats {
    fn record_completed(&mut self, report: &RoundReport) {
        self.rounds_completed = self.rounds_completed.saturating_add(1);
        if report.penalty_us() > 0 {
            self.penalized_rounds = self.penalized_rounds.saturating_add(1);
        }
        let reaction = report.reaction_us();
        self.best_reaction_us = Some(match self.best_reaction_us {
            Some(best) => best.min(reaction),
            None => reaction,
        });
    }
}

/// Picks the target LED from one 32-bit draw.
pub fn pick_target<R: RngCore + ?Sized>(rng: &mut R) -> usize {
    (rng.next_u32() % LED_COUNT as u32) as usize
}

/// Draws a pause in `min_us..=max_us` from one 64-bit draw.
///
/// Expects `min_us <= max_us`, which [`GameConfig`] guarantees.
pub fn random_delay_us<R: RngCore + ?Sized>(rng: &mut R, min_us: u32, max_us: u32) -> u32 {
    let min = u64::from(min_us);
    let span = u64::from(max_us.saturating_sub(min_us)) + 1;
    (min + rng.next_u64() % span) as u32
}

#[derive(Debug, Clone, Copy)]
enum Phase<I: TimeInstant> {
    Idle,
    Countdown,
    RoundActive(Round<I>),
    ShowResult(Multiplexer),
}

/// Runs the reaction game on a board.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source and deadline flag references
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `B` - Board implementation (LEDs, buttons, display, delay)
/// * `R` - Random source
/// * `A` - Deadline alarm, which must fire `deadline` when it expires
pub struct ReactionGame<'t, I, T, B, R, A>
where
    I: TimeInstant,
    T: TimeSource<I>,
    B: Board,
    R: RngCore,
    A: DeadlineAlarm,
{
    board: B,
    time_source: &'t T,
    rng: R,
    alarm: A,
    deadline: &'t DeadlineFlag,
    config: GameConfig,
    phase: Phase<I>,
    start_button: Debouncer,
    buttons: [Debouncer; LED_COUNT],
    last_report: Option<RoundReport>,
    stats: GameStats,
}

impl<'t, I, T, B, R, A> ReactionGame<'t, I, T, B, R, A>
where
    I: TimeInstant,
    T: TimeSource<I>,
    B: Board,
    R: RngCore,
    A: DeadlineAlarm,
{
    /// Creates an idle game with all LEDs and the display off.
    pub fn new(
        mut board: B,
        time_source: &'t T,
        rng: R,
        alarm: A,
        deadline: &'t DeadlineFlag,
        config: GameConfig,
    ) -> Self {
        board.all_off();
        board.clear();

        Self {
            board,
            time_source,
            rng,
            alarm,
            deadline,
            config,
            phase: Phase::Idle,
            start_button: Debouncer::new(config.debounce_us()),
            buttons: [Debouncer::new(config.debounce_us()); LED_COUNT],
            last_report: None,
            stats: GameStats::default(),
        }
    }

    /// Advances the state machine by one step.
    ///
    /// - `Idle`: one poll of the start button.
    /// - `Countdown`: the whole LED countdown and random pause (blocking), then
    ///   arms the round.
    /// - `RoundActive`: one poll of the deadline flag and the buttons.
    /// - `ShowResult`: one multiplex pass over the four digits.
    pub fn step(&mut self) -> Option<GameEvent> {
        let phase = self.phase;
        let (next, event) = match phase {
            Phase::Idle => self.poll_start(),
            Phase::Countdown => self.run_countdown(),
            Phase::RoundActive(round) => self.poll_round(round),
            Phase::ShowResult(mux) => self.refresh_result(mux),
        };
        self.phase = next;
        event
    }

    /// Runs the game forever, handing every event to `on_event`.
    pub fn run<F: FnMut(GameEvent)>(&mut self, mut on_event: F) -> ! {
        loop {
            if let Some(event) = self.step() {
                on_event(event);
            }
        }
    }

    fn poll_start(&mut self) -> (Phase<I>, Option<GameEvent>) {
        if self.read_start() {
            (Phase::Countdown, Some(GameEvent::CountdownStarted))
        } else {
            (Phase::Idle, None)
        }
    }

    fn run_countdown(&mut self) -> (Phase<I>, Option<GameEvent>) {
        let stage = self.config.countdown_stage_us();

        // All three on, then put out from the last LED down
        for lit in (0..=LED_COUNT).rev() {
            for index in 0..LED_COUNT {
                self.board.set_led(index, index < lit);
            }
            if lit > 0 {
                self.board.delay_us(stage);
            }
        }

        let pause = self.draw_pause_us();
        self.board.delay_us(pause);

        let round = self.arm_round();
        let event = GameEvent::RoundStarted {
            target: round.target(),
            start_us: round.started_at().as_micros(),
        };
        (Phase::RoundActive(round), Some(event))
    }

    fn arm_round(&mut self) -> Round<I> {
        self.board.enable_all();

        // Inputs were not polled during the countdown
        self.start_button.reset();
        for button in self.buttons.iter_mut() {
            button.reset();
        }

        self.deadline.reset();
        self.alarm.arm(self.config.deadline_us());

        self.board.all_off();
        let target = pick_target(&mut self.rng);
        self.board.set_led(target, true);

        self.stats.rounds_started = self.stats.rounds_started.saturating_add(1);
        Round::new(target, self.time_source.now())
    }

    fn poll_round(&mut self, mut round: Round<I>) -> (Phase<I>, Option<GameEvent>) {
        let target = round.target();

        if self.deadline.is_fired() {
            self.board.set_led(target, false);
            self.stats.rounds_timed_out = self.stats.rounds_timed_out.saturating_add(1);
            return (Phase::Idle, Some(GameEvent::RoundTimedOut { target }));
        }

        if self.read_button(target) {
            let ended_at = self.time_source.now();
            self.board.set_led(target, false);
            self.alarm.cancel();

            let report = round.finish(ended_at);
            self.stats.record_completed(&report);
            self.last_report = Some(report);

            let mux = Multiplexer::new(report.digits());
            return (Phase::ShowResult(mux), Some(GameEvent::RoundCompleted(report)));
        }

        let mut event = None;
        for button in (0..LED_COUNT).filter(|&b| b != target) {
            if self.read_button(button)
                && round.record_wrong_press(self.config.penalty_us())
            {
                event = Some(GameEvent::PenaltyApplied { button });
            }
        }

        (Phase::RoundActive(round), event)
    }

    fn refresh_result(&mut self, mut mux: Multiplexer) -> (Phase<I>, Option<GameEvent>) {
        for _ in 0..DIGIT_COUNT {
            mux.show_next(&mut self.board);

            if self.read_start() {
                self.board.clear();
                self.start_button.reset();
                return (Phase::Idle, Some(GameEvent::ResultDismissed));
            }

            self.board.delay_us(self.config.digit_dwell_us());
        }

        (Phase::ShowResult(mux), None)
    }

    fn draw_pause_us(&mut self) -> u32 {
        random_delay_us(
            &mut self.rng,
            self.config.random_delay_min_us(),
            self.config.random_delay_max_us(),
        )
    }

    fn read_start(&mut self) -> bool {
        let raw = self.board.is_start_pressed();
        let now = self.time_source.now().as_micros();
        self.start_button.update(raw, now)
    }

    fn read_button(&mut self, index: usize) -> bool {
        let raw = self.board.is_button_pressed(index);
        let now = self.time_source.now().as_micros();
        self.buttons[index].update(raw, now)
    }

    /// Returns the current state.
    pub fn state(&self) -> GameState {
        match self.phase {
            Phase::Idle => GameState::Idle,
            Phase::Countdown => GameState::Countdown,
            Phase::RoundActive(_) => GameState::RoundActive,
            Phase::ShowResult(_) => GameState::ShowResult,
        }
    }

    /// Target LED of the round in progress, if any.
    pub fn current_target(&self) -> Option<usize> {
        match self.phase {
            Phase::RoundActive(round) => Some(round.target()),
            _ => None,
        }
    }

    /// Report of the most recently completed round.
    pub fn last_report(&self) -> Option<RoundReport> {
        self.last_report
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    pub fn alarm(&self) -> &A {
        &self.alarm
    }
}
