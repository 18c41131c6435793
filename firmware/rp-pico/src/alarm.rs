//! Round deadline on RP2040 timer alarm 0.
//!
//! The alarm lives in a critical-section mutex so the `TIMER_IRQ_0` handler
//! can clear it. The handler must call [`on_alarm_interrupt`].

use core::cell::RefCell;

use critical_section::Mutex;
use fugit::ExtU32;
use reaction_timer::{DeadlineAlarm, DeadlineFlag};
use rp_pico::hal::timer::{Alarm, Alarm0};

/// Deadline flag shared between the alarm interrupt and the game loop
pub static DEADLINE: DeadlineFlag = DeadlineFlag::new();

static ALARM: Mutex<RefCell<Option<Alarm0>>> = Mutex::new(RefCell::new(None));

/// Handle to alarm 0 once it has been moved into the interrupt-shared slot
pub struct HardwareAlarm {
    _private: (),
}

impl HardwareAlarm {
    /// Take ownership of alarm 0 and enable its interrupt
    ///
    /// The `TIMER_IRQ_0` line still has to be unmasked in the NVIC.
    pub fn new(mut alarm: Alarm0) -> Self {
        alarm.enable_interrupt();
        critical_section::with(|cs| {
            ALARM.borrow(cs).replace(Some(alarm));
        });
        Self { _private: () }
    }
}

impl DeadlineAlarm for HardwareAlarm {
    fn arm(&mut self, after_us: u32) {
        critical_section::with(|cs| {
            if let Some(alarm) = ALARM.borrow_ref_mut(cs).as_mut() {
                let _ = alarm.schedule(after_us.micros());
            }
        });
    }

    fn cancel(&mut self) {
        critical_section::with(|cs| {
            if let Some(alarm) = ALARM.borrow_ref_mut(cs).as_mut() {
                let _ = alarm.cancel();
            }
        });
    }
}

/// Acknowledge alarm 0 and fire the deadline.
///
/// Call from the `TIMER_IRQ_0` interrupt handler.
pub fn on_alarm_interrupt() {
    critical_section::with(|cs| {
        if let Some(alarm) = ALARM.borrow_ref_mut(cs).as_mut() {
            alarm.clear_interrupt();
        }
    });
    DEADLINE.fire();
}
