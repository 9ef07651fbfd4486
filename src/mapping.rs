//! # Signal Mapper
//!
//! Turns raw RC pulse widths into control parameters: the power flag, the
//! selected output target and the hue angle.
//!
//! All linear conversions go through [`map_range`], the classic integer
//! proportion
//!
//! ```text
//! out = out_min + (x - in_min) * (out_max - out_min) / (in_max - in_min)
//! ```
//!
//! with truncating division. Inputs outside the nominal domain map outside
//! the output range, so every caller clamps before handing the value on.
use core::fmt;

use crate::config::*;

/// Output group the brightness channel currently drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Rgb,
    Aux1,
    Aux2,
}

impl Target {
    /// Targets in selector order.
    pub const ALL: [Target; 3] = [Target::Rgb, Target::Aux1, Target::Aux2];

    /// Label used in the diagnostic line.
    pub fn name(self) -> &'static str {
        match self {
            Target::Rgb => "RGB",
            Target::Aux1 => "LED1",
            Target::Aux2 => "LED2",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Integer linear proportion from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Evaluated in 64 bits, so garbage widths from a glitched capture cannot
/// overflow. Division truncates toward zero. The result is not clamped.
pub fn map_range(x: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i64 {
    let (x, in_min, in_max) = (x as i64, in_min as i64, in_max as i64);
    let (out_min, out_max) = (out_min as i64, out_max as i64);
    out_min + (x - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Power switch: ON strictly above the threshold.
pub fn power_on(pulse_us: i32) -> bool {
    pulse_us > POWER_THRESHOLD_US
}

/// Selector channel to target. The top of the mapped range (3) only occurs
/// at the very top of the stick travel and clamps onto the last target.
pub fn select_target(pulse_us: i32) -> Target {
    let last = (Target::ALL.len() - 1) as i64;
    let index = map_range(pulse_us, PULSE_MIN_US, PULSE_MAX_US, 0, TARGET_SPAN).clamp(0, last);
    Target::ALL[index as usize]
}

/// Hue channel to an angle in `[0, 360]` degrees.
pub fn hue_degrees(pulse_us: i32) -> f32 {
    let hue = map_range(pulse_us, HUE_PULSE_MIN_US, HUE_PULSE_MAX_US, 0, HUE_MAX_DEG);
    (hue as f32).clamp(0.0, HUE_MAX_DEG as f32)
}
