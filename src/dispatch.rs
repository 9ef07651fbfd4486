//! # Output Dispatcher
//!
//! Power gating and the hand-off of final levels to the physical outputs.
//! This is the only place the "off" state exists: the controller keeps
//! computing levels while off, they are just never written out.
use crate::config::PWM_MAX_DUTY;
use crate::control::{Frame, LightLevels};

/// Physical PWM outputs in wiring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Red,
    Green,
    Blue,
    Aux1,
    Aux2,
}

impl Output {
    pub const ALL: [Output; 5] = [
        Output::Red,
        Output::Green,
        Output::Blue,
        Output::Aux1,
        Output::Aux2,
    ];
}

/// Duty levels for every output, indexed by [`Output`].
pub type OutputLevels = [u8; 5];

/// Something that can drive a duty level in `[0, 255]` onto each output.
pub trait LightSink {
    fn set_level(&mut self, output: Output, level: u8);

    /// Writes a full set of levels.
    fn apply(&mut self, levels: &OutputLevels) {
        for (output, level) in Output::ALL.into_iter().zip(levels.iter()) {
            self.set_level(output, *level);
        }
    }
}

impl From<LightLevels> for OutputLevels {
    fn from(levels: LightLevels) -> Self {
        let [r, g, b] = levels.rgb;
        [r, g, b, levels.aux1, levels.aux2]
    }
}

/// PWM compare value that lights an output at `level`.
///
/// With the polarity `SimplePwm` programs, the nRF PWM holds a pin high for
/// `PWM_MAX_DUTY - compare` ticks of each period, so the level is inverted
/// here. Level 0 gives a dark pin, 255 a fully lit one.
pub fn duty_for(level: u8) -> u16 {
    PWM_MAX_DUTY - level as u16
}

/// Levels to materialize for `frame`: the stored levels when powered,
/// all zero otherwise.
pub fn gate(frame: &Frame) -> OutputLevels {
    if frame.power {
        frame.levels.into()
    } else {
        [0; 5]
    }
}

/// Gates `frame` and writes the result to `sink`. Returns what was written.
pub fn dispatch<S: LightSink>(frame: &Frame, sink: &mut S) -> OutputLevels {
    let levels = gate(frame);
    sink.apply(&levels);
    levels
}
