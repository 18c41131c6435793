#![no_std]
#![no_main]

use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::{
    Clock, Sio, Timer,
    clocks::init_clocks_and_plls,
    gpio::{DynPinId, FunctionSioInput, FunctionSioOutput, Pin, PullDown},
    pac::{self, interrupt},
    rosc::RingOscillator,
    watchdog::Watchdog,
};
use rtt_target::{rprintln, rtt_init_print};

use rp_pico_reaction_timer::alarm::{self, DEADLINE, HardwareAlarm};
use rp_pico_reaction_timer::board::{GpioBoard, PinMap};
use rp_pico_reaction_timer::rng::RoscRng;
use rp_pico_reaction_timer::time::{HardwareTimer, Instant};

use reaction_timer::{GameConfig, GameEvent, ReactionGame};

type OutPin = Pin<DynPinId, FunctionSioOutput, PullDown>;
type InPin = Pin<DynPinId, FunctionSioInput, PullDown>;
type Board = GpioBoard<OutPin, InPin, Timer>;

#[interrupt]
fn TIMER_IRQ_0() {
    alarm::on_alarm_interrupt();
    rprintln!("Timer fired!");
}

fn log_event(event: GameEvent) {
    match event {
        GameEvent::CountdownStarted => rprintln!("Start pressed, countdown running"),
        GameEvent::RoundStarted { target, start_us } => {
            rprintln!("LED {} lit at {} us", target, start_us);
        }
        GameEvent::PenaltyApplied { button } => {
            rprintln!("Wrong button {} pressed, penalty applied", button);
        }
        GameEvent::RoundCompleted(report) => {
            rprintln!("{}", report);
            if !report.fits_display() {
                rprintln!(
                    "Reaction time {} us is past the readout range, seconds digit wraps",
                    report.reaction_us()
                );
            }
        }
        GameEvent::RoundTimedOut { target } => {
            rprintln!("No press on button {} before the deadline", target);
        }
        GameEvent::ResultDismissed => rprintln!("Result cleared"),
    }
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== RP Pico Reaction Timer ===");

    // Get peripherals
    let mut pac = pac::Peripherals::take().unwrap();

    // Set up watchdog driver
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure clocks (125 MHz)
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    rprintln!(
        "System clock configured: {} Hz",
        clocks.system_clock.freq().to_Hz()
    );

    // Set up the Single Cycle IO (for GPIO access)
    let sio = Sio::new(pac.SIO);

    // Set the pins to their default state
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let digit_select: [OutPin; 4] = [
        pins.gpio0.into_push_pull_output().into_dyn_pin(),
        pins.gpio1.into_push_pull_output().into_dyn_pin(),
        pins.gpio2.into_push_pull_output().into_dyn_pin(),
        pins.gpio3.into_push_pull_output().into_dyn_pin(),
    ];
    let segments: [OutPin; 7] = [
        pins.gpio4.into_push_pull_output().into_dyn_pin(),
        pins.gpio5.into_push_pull_output().into_dyn_pin(),
        pins.gpio6.into_push_pull_output().into_dyn_pin(),
        pins.gpio7.into_push_pull_output().into_dyn_pin(),
        pins.gpio8.into_push_pull_output().into_dyn_pin(),
        pins.gpio9.into_push_pull_output().into_dyn_pin(),
        pins.gpio10.into_push_pull_output().into_dyn_pin(),
    ];
    let leds: [OutPin; 3] = [
        pins.gpio16.into_push_pull_output().into_dyn_pin(),
        pins.gpio17.into_push_pull_output().into_dyn_pin(),
        pins.gpio18.into_push_pull_output().into_dyn_pin(),
    ];
    let buttons: [InPin; 3] = [
        pins.gpio19.into_pull_down_input().into_dyn_pin(),
        pins.gpio20.into_pull_down_input().into_dyn_pin(),
        pins.gpio21.into_pull_down_input().into_dyn_pin(),
    ];
    let start: InPin = pins.gpio22.into_pull_down_input().into_dyn_pin();

    rprintln!(
        "Digits on GPIO{:?}, segments on GPIO{:?}",
        PinMap::DIGIT_SELECT,
        PinMap::SEGMENTS
    );
    rprintln!(
        "LEDs on GPIO{:?}, buttons on GPIO{:?}, start on GPIO{}",
        PinMap::LEDS,
        PinMap::BUTTONS,
        PinMap::START
    );

    // Hardware timer: time source, busy-wait delay and the deadline alarm
    let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let alarm = HardwareAlarm::new(timer.alarm_0().unwrap());
    let time_source = HardwareTimer::new(timer);

    // SAFETY: the handler only touches the critical-section protected alarm
    // and the atomic deadline flag
    unsafe {
        pac::NVIC::unmask(pac::Interrupt::TIMER_IRQ_0);
    }

    let rng = RoscRng::new(RingOscillator::new(pac.ROSC).initialize());
    let board = GpioBoard::new(digit_select, segments, leds, buttons, start, timer);

    rprintln!("=== Hardware Ready ===");

    let mut game: ReactionGame<'_, Instant, HardwareTimer, Board, RoscRng, HardwareAlarm> =
        ReactionGame::new(
            board,
            &time_source,
            rng,
            alarm,
            &DEADLINE,
            GameConfig::default(),
        );

    rprintln!("Press start to play");

    game.run(log_event)
}
