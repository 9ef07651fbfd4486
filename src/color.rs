//! # Color Converter
//!
//! HSV to RGB over the canonical hue hexagon, plus the step that folds the
//! shaped brightness into the color.
use num_traits::Float;

/// An RGB triple of output levels.
pub type Rgb = [u8; 3];

/// Converts `h` degrees (any value, wrapped into `[0, 360)`), saturation `s`
/// and value `v` (both clamped to `[0, 1]`) into 8-bit RGB.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    let mut h = h % 360.0;
    if h < 0.0 {
        h += 360.0;
    }
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);

    let c = v * s;
    let x = c * (1.0 - Float::abs((h / 60.0) % 2.0 - 1.0));
    let m = v - c;

    let (r1, g1, b1) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    [r1, g1, b1].map(|component| to_level(component + m))
}

fn to_level(unit: f32) -> u8 {
    (Float::round(unit * 255.0) as i32).clamp(0, 255) as u8
}

/// Scales each component by `brightness / 255`. Integer division, so the
/// result never rounds up.
pub fn scale_rgb(rgb: Rgb, brightness: u8) -> Rgb {
    rgb.map(|component| (component as u32 * brightness as u32 / 255) as u8)
}
