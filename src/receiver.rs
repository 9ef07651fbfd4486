//! # RC Receiver Input Module
//!
//! Pulse-width capture for one receiver channel. Each input line gets its
//! own task that sleeps on GPIOTE edge events and timestamps every
//! transition from `TIMER0`, free-running at 1 MHz in 32-bit mode.
//!
//! ## Timestamps
//!
//! The four receivers share `TIMER0` and each owns one of its capture
//! registers (CC0..CC3), so a capture on one channel never clobbers
//! another. The embassy time driver ticks at 32.768 kHz, about 30 us per
//! tick, which would move the hue by ~14 degrees per tick; the hardware
//! timer resolves single microseconds.
//!
//! The capture is triggered from the task after the edge wakes it, so the
//! executor's wake latency still lands in the width. Both edges of a pulse
//! see a similar delay, which mostly cancels.
//!
//! Edge handling is last-value-wins: the task updates the channel's cell in
//! [`CHANNELS`] and never queues. Glitches and missed edges produce bogus
//! widths that the pipeline clamps, and the next full pulse overwrites them.
use crate::*;

/// Edge-capture task state for one RC channel.
pub struct Receiver {
    input: Input<'static, AnyPin>,
    /// This channel's capture register on the shared microsecond timer.
    clock: Cc<'static, TIMER0>,
    channel: &'static PulseChannel,
}

impl Receiver {
    /// Claims `pin` as a pulled-up input feeding `channel`'s cell.
    ///
    /// # Arguments
    ///
    /// * `pin` - receiver signal line
    /// * `clock` - a capture register of the running 1 MHz `TIMER0`, not
    ///   shared with any other receiver
    /// * `channel` - role of this line; selects the cell in [`CHANNELS`]
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// let receiver = Receiver::new(AnyPin::from(board.p2), clock.cc(2), Channel::Hue);
    /// receiver.run().await;
    /// ```
    pub fn new(pin: AnyPin, clock: Cc<'static, TIMER0>, channel: Channel) -> Self {
        Self {
            input: Input::new(pin, Pull::Up),
            clock,
            channel: CHANNELS.channel(channel),
        }
    }

    /// Measures pulses forever. Never blocks anything but itself.
    ///
    /// # Operation
    /// 1. Sleep until the pin changes level
    /// 2. Capture the timer into this receiver's CC register
    /// 3. Hand level and timestamp to [`PulseChannel::on_edge`]
    pub async fn run(mut self) -> ! {
        loop {
            self.input.wait_for_any_edge().await;
            let now_us = self.clock.capture();
            self.channel.on_edge(self.input.is_high(), now_us);
        }
    }
}
