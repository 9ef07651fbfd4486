//! # Brightness Shaper
//!
//! Gamma-shaped brightness with a visible floor: the stick never drives an
//! output fully dark, and equal stick travel reads as equal perceived change.
use num_traits::Float;

use crate::config::*;
use crate::mapping::map_range;

/// Brightness-channel pulse width to an output level in
/// `[BRIGHTNESS_FLOOR, BRIGHTNESS_MAX]`.
///
/// The width is normalized to a fraction of the nominal pulse range,
/// clamped to `[0, 1]`, raised to [`GAMMA`], then spread over
/// `BRIGHTNESS_SPAN` above the floor. The fractional part is truncated.
pub fn shape_brightness(pulse_us: i32) -> u8 {
    let steps = map_range(pulse_us, PULSE_MIN_US, PULSE_MAX_US, 0, BRIGHTNESS_STEPS);
    let fraction = (steps as f32 / BRIGHTNESS_STEPS as f32).clamp(0.0, 1.0);
    let level = Float::powf(fraction, GAMMA) * BRIGHTNESS_SPAN as f32 + BRIGHTNESS_FLOOR as f32;
    (level as i32).clamp(BRIGHTNESS_FLOOR, BRIGHTNESS_MAX) as u8
}
