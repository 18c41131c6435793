//! Optional time-window debouncing for the polled buttons.

/// Level debouncer for a polled button.
///
/// A new level is reported only after the raw input has held it for the
/// whole window. A zero window passes the raw level straight through, which
/// is how the buttons behave unless a debounce window is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    stable: bool,
    candidate: bool,
    candidate_since_us: u64,
    window_us: u32,
}

impl Debouncer {
    /// Create a new debouncer reporting released
    ///
    /// # Arguments
    /// * `window_us` - How long a level must hold before it is reported
    pub fn new(window_us: u32) -> Self {
        Self {
            stable: false,
            candidate: false,
            candidate_since_us: 0,
            window_us,
        }
    }

    /// Feed a raw sample and get the debounced level back
    ///
    /// # Arguments
    /// * `raw` - Current raw level (true if pressed)
    /// * `now_us` - Current time in microseconds
    pub fn update(&mut self, raw: bool, now_us: u64) -> bool {
        if self.window_us == 0 {
            self.stable = raw;
            return raw;
        }

        if raw != self.candidate {
            self.candidate = raw;
            self.candidate_since_us = now_us;
        }

        if self.candidate != self.stable
            && now_us.wrapping_sub(self.candidate_since_us) >= u64::from(self.window_us)
        {
            self.stable = self.candidate;
        }

        self.stable
    }

    /// Last reported level.
    pub fn is_pressed(&self) -> bool {
        self.stable
    }

    /// Forget any level seen so far and report released again.
    ///
    /// Call when the button has not been polled for a while, so a level
    /// held before the gap is not reported after it.
    pub fn reset(&mut self) {
        self.stable = false;
        self.candidate = false;
        self.candidate_since_us = 0;
    }
}
