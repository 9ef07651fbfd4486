//! # Light Output Module
//!
//! Hardware PWM for the five light outputs. The nRF52833 PWM peripheral has
//! four channels per instance, so the RGB LED sits on `PWM0` and the two
//! auxiliary LEDs on `PWM1`.
//!
//! ## Timing
//!
//! ```text
//! pwm_clock = 16 MHz / 16 = 1 MHz
//! period    = PWM_MAX_DUTY ticks = 255 us (~3.9 kHz)
//! ```
//!
//! ## Polarity
//!
//! `SimplePwm` writes compare values with the polarity bit clear, which
//! keeps a pin high for `PWM_MAX_DUTY - compare` ticks. Every level goes
//! through [`duty_for`] so that level 0 is dark and 255 is fully lit, the
//! same active-high sense as the LEDs were wired for.
use crate::*;

/// PWM-backed [`LightSink`].
///
/// Owns both PWM instances for the lifetime of the firmware. Levels are
/// written straight to the peripheral; there is no shadow copy.
pub struct Lights {
    /// Red, green, blue on channels 0..3.
    rgb: SimplePwm<'static, PWM0>,
    /// Aux1, aux2 on channels 0..2.
    aux: SimplePwm<'static, PWM1>,
}

impl Lights {
    /// Configures both PWM instances and drives every output dark.
    ///
    /// # Arguments
    ///
    /// * `rgb` - three-channel PWM on the red, green and blue pins
    /// * `aux` - two-channel PWM on the LED1 and LED2 pins
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// let rgb = SimplePwm::new_3ch(board.pwm0, board.p9, board.p16, board.p13);
    /// let aux = SimplePwm::new_2ch(pwm1, board.p14, board.p15);
    /// let lights = Lights::new(rgb, aux); // all five outputs off
    /// ```
    pub fn new(rgb: SimplePwm<'static, PWM0>, aux: SimplePwm<'static, PWM1>) -> Self {
        setup(&rgb);
        setup(&aux);
        let mut lights = Self { rgb, aux };
        lights.apply(&[0; 5]);
        lights
    }
}

impl LightSink for Lights {
    fn set_level(&mut self, output: Output, level: u8) {
        let duty = duty_for(level);
        match output {
            Output::Red => self.rgb.set_duty(0, duty),
            Output::Green => self.rgb.set_duty(1, duty),
            Output::Blue => self.rgb.set_duty(2, duty),
            Output::Aux1 => self.aux.set_duty(0, duty),
            Output::Aux2 => self.aux.set_duty(1, duty),
        }
    }
}

fn setup<T: pwm::Instance>(pwm: &SimplePwm<'static, T>) {
    pwm.set_prescaler(Prescaler::Div16);
    pwm.set_max_duty(PWM_MAX_DUTY);
}
