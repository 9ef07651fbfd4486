//! # Tunables
//!
//! Every knob of the light pipeline is a compile-time constant. There is no
//! runtime configuration surface.
//!
//! All pulse widths are in microseconds. Each input domain has a nonzero
//! span, which keeps the [`map_range`](crate::mapping::map_range)
//! denominators away from zero.
use embassy_time::Duration;

/// Pulse width every channel reports before its first complete pulse.
pub const NEUTRAL_PULSE_US: i32 = 1500;

/// Nominal RC pulse range shared by target select and brightness.
pub const PULSE_MIN_US: i32 = 1000;
pub const PULSE_MAX_US: i32 = 2000;

/// Power is ON only strictly above this width. No hysteresis.
pub const POWER_THRESHOLD_US: i32 = 1500;

/// Target select maps `[PULSE_MIN_US, PULSE_MAX_US]` onto `[0, TARGET_SPAN]`
/// before clamping to the last target index.
pub const TARGET_SPAN: i32 = 3;

/// Hue input floor. Everything below saturates to hue 0.
pub const HUE_PULSE_MIN_US: i32 = 1200;
pub const HUE_PULSE_MAX_US: i32 = 2000;
pub const HUE_MAX_DEG: i32 = 360;

/// Brightness normalization resolution (steps per unit fraction).
pub const BRIGHTNESS_STEPS: i32 = 1000;
pub const GAMMA: f32 = 1.2;
pub const BRIGHTNESS_FLOOR: i32 = 40;
pub const BRIGHTNESS_SPAN: i32 = 215;
pub const BRIGHTNESS_MAX: i32 = 255;

/// Fixed saturation and value fed to the color converter.
pub const SATURATION: f32 = 1.0;
pub const VALUE: f32 = 1.0;

/// Top of the PWM counter. One counter step per light level.
pub const PWM_MAX_DUTY: u16 = 255;

/// Pause between control cycles.
pub const CYCLE_PERIOD: Duration = Duration::from_millis(50);
