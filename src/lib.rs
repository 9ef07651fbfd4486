//! # RC Light Controller
//!
//! Reads four RC receiver PWM channels and drives an RGB LED plus two
//! auxiliary LEDs from them:
//!
//! - **Target select**: which output group the brightness stick adjusts
//!   (RGB, LED1 or LED2)
//! - **Brightness**: gamma-shaped level with a visible floor
//! - **Hue**: color of the RGB LED
//! - **Power**: gates every output
//!
//! This crate holds the board-independent pipeline so it can be tested on a
//! host. The micro:bit firmware in `main.rs` feeds it edge events and writes
//! its levels to hardware PWM.
#![cfg_attr(not(test), no_std)]

pub mod channels;
pub mod color;
pub mod config;
pub mod control;
pub mod dispatch;
pub mod gamma;
pub mod mapping;

pub use channels::{Channel, ChannelStore, PulseChannel, PulseWidths};
pub use control::{Controller, Frame, LightLevels};
pub use dispatch::{dispatch, duty_for, gate, LightSink, Output, OutputLevels};
pub use mapping::Target;
