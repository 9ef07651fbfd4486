//! Edge events in, gated PWM levels out.
use mb2_rc_lights::{
    dispatch, Channel, ChannelStore, Controller, LightSink, Output, OutputLevels, Target,
};

#[derive(Default)]
struct RecordingLights {
    levels: OutputLevels,
}

impl LightSink for RecordingLights {
    fn set_level(&mut self, output: Output, level: u8) {
        self.levels[output as usize] = level;
    }
}

/// A receiver plus the board around it, driven by simulated edges.
struct Rig {
    store: ChannelStore,
    controller: Controller,
    lights: RecordingLights,
    now_us: u32,
}

impl Rig {
    fn new() -> Self {
        Self {
            store: ChannelStore::new(),
            controller: Controller::new(),
            lights: RecordingLights::default(),
            now_us: 0,
        }
    }

    fn pulse(&mut self, channel: Channel, width_us: u32) {
        let cell = self.store.channel(channel);
        cell.on_edge(true, self.now_us);
        self.now_us = self.now_us.wrapping_add(width_us);
        cell.on_edge(false, self.now_us);
        self.now_us = self.now_us.wrapping_add(20_000 - width_us);
    }

    fn sticks(&mut self, target_select: u32, brightness: u32, hue: u32, power: u32) {
        self.pulse(Channel::TargetSelect, target_select);
        self.pulse(Channel::Brightness, brightness);
        self.pulse(Channel::Hue, hue);
        self.pulse(Channel::Power, power);
    }

    fn cycle(&mut self) -> (Target, OutputLevels) {
        let frame = self.controller.step(&self.store.snapshot());
        let written = dispatch(&frame, &mut self.lights);
        assert_eq!(written, self.lights.levels);
        (frame.target, written)
    }
}

#[test]
fn boots_dark_before_any_pulse() {
    let mut rig = Rig::new();
    let (target, levels) = rig.cycle();
    assert_eq!(target, Target::Aux1);
    assert_eq!(levels, [0; 5]);
}

#[test]
fn power_gate_follows_threshold() {
    let mut rig = Rig::new();
    rig.sticks(1000, 2000, 1200, 1501);
    assert_eq!(rig.cycle().1, [255, 0, 0, 0, 0]);

    rig.sticks(1000, 2000, 1200, 1499);
    assert_eq!(rig.cycle().1, [0; 5]);

    rig.sticks(1000, 2000, 1200, 1500);
    assert_eq!(rig.cycle().1, [0; 5]);
}

#[test]
fn power_off_hides_every_stored_level() {
    let mut rig = Rig::new();
    rig.sticks(1000, 2000, 1733, 1900);
    rig.cycle();
    rig.sticks(1500, 1700, 1733, 1900);
    rig.cycle();
    rig.sticks(2000, 1300, 1733, 1900);
    let (_, on) = rig.cycle();
    assert_ne!(on[..3], [0, 0, 0]);
    assert!(on[Output::Aux1 as usize] > 0 && on[Output::Aux2 as usize] > 0, "{on:?}");

    rig.pulse(Channel::Power, 1100);
    assert_eq!(rig.cycle().1, [0; 5]);

    rig.pulse(Channel::Power, 1900);
    assert_eq!(rig.cycle().1, on);
}

#[test]
fn target_selection_at_boundaries() {
    let mut rig = Rig::new();
    for (width, expected) in [(1000, Target::Rgb), (1500, Target::Aux1), (2000, Target::Aux2)] {
        rig.pulse(Channel::TargetSelect, width);
        assert_eq!(rig.cycle().0, expected, "width {width}");
    }
}

#[test]
fn switching_targets_retains_stale_brightness() {
    let mut rig = Rig::new();
    rig.sticks(1500, 1800, 1500, 1900);
    let (_, before) = rig.cycle();
    let aux1 = before[Output::Aux1 as usize];
    assert!(aux1 > 40);

    rig.sticks(2000, 1800, 1500, 1900);
    rig.cycle();
    for brightness in [1000, 1400, 2000] {
        rig.pulse(Channel::Brightness, brightness);
        let (target, levels) = rig.cycle();
        assert_eq!(target, Target::Aux2);
        assert_eq!(levels[Output::Aux1 as usize], aux1);
        assert_eq!(levels[Output::Red as usize..=Output::Blue as usize], [0, 0, 0]);
    }
}

#[test]
fn rgb_colors_scale_with_brightness() {
    let mut rig = Rig::new();
    // Hue 240: pure blue.
    rig.sticks(1000, 2000, 1734, 1900);
    assert_eq!(rig.cycle().1, [0, 0, 255, 0, 0]);
    // Hue 60: yellow at the brightness floor.
    rig.sticks(1000, 1000, 1334, 1900);
    assert_eq!(rig.cycle().1, [40, 40, 0, 0, 0]);
}

#[test]
fn stable_inputs_give_identical_outputs() {
    let mut rig = Rig::new();
    rig.sticks(1100, 1620, 1880, 1750);
    let first = rig.cycle();
    for _ in 0..50 {
        rig.sticks(1100, 1620, 1880, 1750);
        assert_eq!(rig.cycle(), first);
    }
}

#[test]
fn glitched_pulse_heals_on_next_reading() {
    let mut rig = Rig::new();
    rig.sticks(1500, 2000, 1500, 1900);
    let (_, good) = rig.cycle();

    // Falling edge with no matching rising edge: huge bogus width.
    rig.now_us = rig.now_us.wrapping_add(1_000_000);
    rig.store.channel(Channel::Brightness).on_edge(false, rig.now_us);
    let (_, glitched) = rig.cycle();
    assert_eq!(glitched[Output::Aux1 as usize], 255);

    rig.pulse(Channel::Brightness, 2000);
    assert_eq!(rig.cycle().1, good);
}

#[test]
fn capture_survives_timestamp_wrap() {
    let mut rig = Rig::new();
    rig.now_us = u32::MAX - 700;
    rig.sticks(1500, 2000, 1500, 1900);
    assert_eq!(rig.store.snapshot().brightness, 2000);
    assert_eq!(rig.cycle().1[Output::Aux1 as usize], 255);
}

#[test]
fn hue_tracks_single_microsecond_steps() {
    let mut rig = Rig::new();
    rig.sticks(1000, 2000, 1600, 1900);
    assert_eq!(rig.cycle().1, [0, 255, 255, 0, 0]);
    // Three microseconds longer is already a different hue degree.
    rig.pulse(Channel::Hue, 1603);
    assert_eq!(rig.cycle().1, [0, 251, 255, 0, 0]);
    rig.pulse(Channel::Hue, 1600);
    assert_eq!(rig.cycle().1, [0, 255, 255, 0, 0]);
}
