//! # Channel State Store
//!
//! Latest measured pulse width for each RC input, written by that channel's
//! edge-capture task and read once per control cycle.
//!
//! ## Sharing model
//!
//! Every channel is a single-writer cell: only its own capture task calls
//! [`PulseChannel::on_edge`]. The control loop takes a [`PulseWidths`]
//! snapshot with relaxed loads and no lock. A snapshot may mix widths from
//! different pulse periods, or miss an update that lands mid-read; each value
//! is one scalar, so the worst case is a width that is one pulse stale. That
//! is invisible on a 50 ms lighting loop, and the next cycle catches up.
//!
//! Only the latest value matters. Nothing is queued.
use core::sync::atomic::{AtomicI32, AtomicU32, Ordering};

use crate::config::NEUTRAL_PULSE_US;

/// Role of an RC input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    TargetSelect,
    Brightness,
    Hue,
    Power,
}

/// Pulse-width capture state for one input line.
pub struct PulseChannel {
    /// Timestamp of the last rising edge, microseconds, wrapping.
    start_us: AtomicU32,
    /// Last measured width. Unvalidated: glitches and a missed rising edge
    /// leave garbage here until the next complete pulse.
    width_us: AtomicI32,
}

impl PulseChannel {
    pub const fn new() -> Self {
        Self {
            start_us: AtomicU32::new(0),
            width_us: AtomicI32::new(NEUTRAL_PULSE_US),
        }
    }

    /// Records one logic-level transition seen at `now_us`.
    ///
    /// A rising edge (`high`) marks the pulse start. A falling edge stores
    /// the time elapsed since that start. Timestamps wrap; the elapsed time
    /// is taken modulo 2^32 and reinterpreted as signed, so a stale or
    /// missing start can yield any value, including negative ones.
    pub fn on_edge(&self, high: bool, now_us: u32) {
        if high {
            self.start_us.store(now_us, Ordering::Relaxed);
        } else {
            let start = self.start_us.load(Ordering::Relaxed);
            let width = now_us.wrapping_sub(start) as i32;
            self.width_us.store(width, Ordering::Relaxed);
        }
    }

    pub fn width_us(&self) -> i32 {
        self.width_us.load(Ordering::Relaxed)
    }
}

impl Default for PulseChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Widths of all four inputs as seen by one control cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseWidths {
    pub target_select: i32,
    pub brightness: i32,
    pub hue: i32,
    pub power: i32,
}

impl Default for PulseWidths {
    fn default() -> Self {
        Self {
            target_select: NEUTRAL_PULSE_US,
            brightness: NEUTRAL_PULSE_US,
            hue: NEUTRAL_PULSE_US,
            power: NEUTRAL_PULSE_US,
        }
    }
}

/// One [`PulseChannel`] per input role. Lives in a `static`.
pub struct ChannelStore {
    channels: [PulseChannel; 4],
}

impl ChannelStore {
    pub const fn new() -> Self {
        Self {
            channels: [
                PulseChannel::new(),
                PulseChannel::new(),
                PulseChannel::new(),
                PulseChannel::new(),
            ],
        }
    }

    pub fn channel(&self, channel: Channel) -> &PulseChannel {
        &self.channels[channel as usize]
    }

    /// Reads every channel once. See the module docs for the tearing rules.
    pub fn snapshot(&self) -> PulseWidths {
        PulseWidths {
            target_select: self.channel(Channel::TargetSelect).width_us(),
            brightness: self.channel(Channel::Brightness).width_us(),
            hue: self.channel(Channel::Hue).width_us(),
            power: self.channel(Channel::Power).width_us(),
        }
    }
}

impl Default for ChannelStore {
    fn default() -> Self {
        Self::new()
    }
}
