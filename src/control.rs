//! # Control Cycle
//!
//! One pass of the light pipeline over a channel snapshot:
//!
//! ```text
//! PulseWidths -> power / target / hue / brightness -> stored levels -> Frame
//! ```
//!
//! Only the selected target's levels are recomputed. The other targets keep
//! their last levels, and keep emitting them while power is on, until they
//! are selected again.
use core::fmt;

use crate::channels::PulseWidths;
use crate::color::{hsv_to_rgb, scale_rgb, Rgb};
use crate::config::{SATURATION, VALUE};
use crate::gamma::shape_brightness;
use crate::mapping::{hue_degrees, power_on, select_target, Target};

/// Brightness last computed for each output, before power gating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LightLevels {
    pub rgb: Rgb,
    pub aux1: u8,
    pub aux2: u8,
}

/// Everything one control cycle derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub target: Target,
    pub power: bool,
    /// Shaped brightness for the selected target.
    pub brightness: u8,
    /// Hue from the hue channel. Applied only while RGB is selected.
    pub hue: f32,
    pub levels: LightLevels,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.levels.rgb;
        write!(
            f,
            "[Selected] {} | Brightness R,G,B: {}, {}, {} | LED1: {} | LED2: {} | ON/OFF: {}",
            self.target,
            r,
            g,
            b,
            self.levels.aux1,
            self.levels.aux2,
            self.power as u8,
        )
    }
}

/// Holds the per-output levels that persist between cycles.
#[derive(Debug, Default)]
pub struct Controller {
    levels: LightLevels,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one cycle. Pure in `pulses` apart from the stored levels, so a
    /// steady input gives the same frame every time.
    pub fn step(&mut self, pulses: &PulseWidths) -> Frame {
        let power = power_on(pulses.power);
        let target = select_target(pulses.target_select);
        let brightness = shape_brightness(pulses.brightness);
        let hue = hue_degrees(pulses.hue);

        match target {
            Target::Rgb => {
                let color = hsv_to_rgb(hue, SATURATION, VALUE);
                self.levels.rgb = scale_rgb(color, brightness);
            }
            Target::Aux1 => self.levels.aux1 = brightness,
            Target::Aux2 => self.levels.aux2 = brightness,
        }

        Frame {
            target,
            power,
            brightness,
            hue,
            levels: self.levels,
        }
    }
}
