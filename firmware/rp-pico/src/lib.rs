#![no_std]

pub mod alarm;
pub mod board;
pub mod rng;
pub mod time;
