//! # RC Light Controller Firmware
//!
//! micro:bit v2 firmware that lights an RGB LED and two auxiliary LEDs from
//! four RC receiver PWM channels.
//!
//! ## Wiring
//!
//! Only edge pins the `microbit-bsp` 0.3 `Microbit` struct exposes are used.
//!
//! | Edge pin | Direction | Role                          |
//! |----------|-----------|-------------------------------|
//! | P1       | in        | target select (RGB/LED1/LED2) |
//! | P2       | in        | brightness                    |
//! | P8       | in        | hue                           |
//! | P12      | in        | power                         |
//! | P9       | out       | red                           |
//! | P16      | out       | green                         |
//! | P13      | out       | blue                          |
//! | P14      | out       | LED1                          |
//! | P15      | out       | LED2                          |
//!
//! ## Tasks
//!
//! - [`Receiver`] ×4: edge-triggered pulse capture, one per input
//! - [`ControlLoop`]: 50 ms pipeline cycle, PWM writes and RTT diagnostics
#![no_std]
#![no_main]

mod control_loop;
mod lights;
mod receiver;

pub use control_loop::*;
pub use lights::*;
pub use receiver::*;

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};

use embassy_executor::Spawner;
use embassy_futures::join;
use embassy_time::Timer;
use microbit_bsp::{
    embassy_nrf::{
        gpio::{AnyPin, Input, Pull},
        peripherals::{PWM0, PWM1, TIMER0},
        pwm::{self, Prescaler, SimplePwm},
        timer::{self, Cc, Frequency},
    },
    Microbit,
};

use mb2_rc_lights::{
    config::{CYCLE_PERIOD, PWM_MAX_DUTY},
    dispatch, duty_for, Channel, ChannelStore, Controller, LightSink, Output, PulseChannel,
};

/// Pulse widths shared by the receiver tasks and the control loop.
static CHANNELS: ChannelStore = ChannelStore::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    rtt_init_print!();
    rprintln!("rc lights: starting");
    let board = Microbit::default();

    // Free-running 32-bit microsecond clock; one CC register per receiver.
    let mut clock = timer::Timer::new(board.timer0);
    clock.set_frequency(Frequency::F1MHz);
    clock.start();

    let receivers = [
        Receiver::new(AnyPin::from(board.p1), clock.cc(0), Channel::TargetSelect),
        Receiver::new(AnyPin::from(board.p2), clock.cc(1), Channel::Brightness),
        Receiver::new(AnyPin::from(board.p8), clock.cc(2), Channel::Hue),
        Receiver::new(AnyPin::from(board.p12), clock.cc(3), Channel::Power),
    ];

    // SAFETY: the BSP only hands out PWM0. `Microbit::default()` has already
    // initialized the HAL, and nothing else in this firmware takes PWM1.
    let pwm1 = unsafe { PWM1::steal() };
    let rgb = SimplePwm::new_3ch(board.pwm0, board.p9, board.p16, board.p13);
    let aux = SimplePwm::new_2ch(pwm1, board.p14, board.p15);
    let control = ControlLoop::new(Lights::new(rgb, aux));

    join::join(
        join::join_array(receivers.map(Receiver::run)),
        control.run(),
    )
    .await;

    panic!("fell off end of main loop");
}
