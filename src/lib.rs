#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ReactionGame`**: The game loop as an explicit state machine, advanced with `step()`
//! - **`GameState`**: `Idle`, `Countdown`, `RoundActive` or `ShowResult`
//! - **`GameEvent`**: What a step did (round started, penalty, completed, timed out, ...)
//! - **`RoundReport`**: Start/end timestamps, elapsed time and penalty of a completed round
//! - **`ReactionDigits`**: The four digits a reaction time shows as
//! - **`GameConfig`**: Countdown, pause, deadline, penalty, multiplex and debounce timings
//! - **`DeadlineFlag`**: Atomic flag the alarm interrupt sets when the round deadline expires
//! - **`Board`**: LEDs, buttons, display and busy-wait delay, to implement for your hardware
//! - **`DeadlineAlarm`**: One-shot alarm to implement for your timer peripheral
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Random numbers come from any `rand_core::RngCore`; on hardware this is
//! typically a true random bit source.

pub mod config;
pub mod deadline;
pub mod debounce;
pub mod display;
pub mod game;
pub mod hardware;
pub mod round;
pub mod time;
pub mod types;

pub use config::GameConfig;
pub use deadline::DeadlineFlag;
pub use debounce::Debouncer;
pub use display::{DIGIT_SEGMENTS, DISPLAY_LIMIT_US, Multiplexer, ReactionDigits};
pub use game::{GameStats, ReactionGame, pick_target, random_delay_us};
pub use hardware::{
    Board, ButtonPanel, DIGIT_COUNT, DeadlineAlarm, LED_COUNT, SEGMENT_COUNT, SegmentDisplay,
    SegmentPattern, StatusLeds,
};
pub use round::{Round, RoundReport};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{ConfigError, GameEvent, GameState};
