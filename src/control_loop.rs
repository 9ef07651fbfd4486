//! # Control Loop Module
//!
//! The fixed-cadence half of the firmware. Every [`CYCLE_PERIOD`] it:
//!
//! 1. Snapshots the four pulse widths from [`CHANNELS`]
//! 2. Runs the pipeline ([`Controller::step`])
//! 3. Writes the power-gated levels to the PWM outputs
//! 4. Prints the diagnostic line over RTT
//!
//! The only suspension point is the pacing timer. Receiver tasks may run
//! between any two steps; see [`ChannelStore`] for why that is fine.
use crate::*;

/// Owns the pipeline state and the light outputs.
pub struct ControlLoop {
    controller: Controller,
    lights: Lights,
}

impl ControlLoop {
    /// Takes ownership of the outputs. Stored levels start at 0.
    pub fn new(lights: Lights) -> Self {
        Self {
            controller: Controller::new(),
            lights,
        }
    }

    fn cycle(&mut self) {
        let pulses = CHANNELS.snapshot();
        let frame = self.controller.step(&pulses);
        dispatch(&frame, &mut self.lights);
        rprintln!("{}", frame);
    }

    /// Main control loop.
    ///
    /// # Operation
    /// 1. Run one cycle: snapshot, step, dispatch, print
    /// 2. Sleep for [`CYCLE_PERIOD`] (50 ms)
    /// 3. Repeat
    ///
    /// # Output Format
    ///
    /// ```text
    /// [Selected] RGB | Brightness R,G,B: 0, 255, 0 | LED1: 40 | LED2: 0 | ON/OFF: 1
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// let control = ControlLoop::new(Lights::new(rgb, aux));
    /// control.run().await; // never returns
    /// ```
    ///
    /// # Never Returns
    ///
    /// There is no stop condition; only power removal ends it.
    pub async fn run(mut self) -> ! {
        loop {
            self.cycle();
            Timer::after(CYCLE_PERIOD).await;
        }
    }
}
