//! Round deadline flag shared between the alarm interrupt and the game loop.

use core::sync::atomic::{AtomicBool, Ordering};

/// Set by the alarm interrupt when the round deadline expires, polled and
/// cleared by the game loop.
///
/// Writes use `Release` and reads use `Acquire`, so anything the interrupt
/// did before firing is visible to the loop once it observes the flag. Only
/// plain loads and stores are used, which keeps the flag usable on cores
/// without atomic read-modify-write (e.g. Cortex-M0+).
#[derive(Debug)]
pub struct DeadlineFlag {
    fired: AtomicBool,
}

impl DeadlineFlag {
    /// Creates a cleared flag. Usable in a `static`.
    pub const fn new() -> Self {
        Self {
            fired: AtomicBool::new(false),
        }
    }

    /// Marks the deadline as expired. Safe to call from interrupt context.
    pub fn fire(&self) {
        self.fired.store(true, Ordering::Release);
    }

    /// Returns true once the deadline has fired since the last [`reset`](Self::reset).
    pub fn is_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }

    /// Clears the flag before a new round is armed.
    pub fn reset(&self) {
        self.fired.store(false, Ordering::Release);
    }
}

impl Default for DeadlineFlag {
    fn default() -> Self {
        Self::new()
    }
}
