//! Shades, tints and two-color mixing

use crate::color::conversion::clamp_channel;
use crate::color::{hsl_to_rgb, rgb_to_hsl, Rgb};
use crate::constants::palettes;

use super::Palette;

/// Position of step `i` of `count` in `[0, 1]`. A single step sits at 0.
#[inline]
pub(crate) fn step_fraction(i: usize, count: usize) -> f64 {
    if count <= 1 {
        0.0
    } else {
        i as f64 / (count - 1) as f64
    }
}

/// `count` colors sharing the hue and saturation of `color`, with lightness
/// walking linearly from 10% to 90%.
///
/// Hue and saturation are taken from the display-rounded HSL view, so every
/// shade of a color has the same whole-degree hue.
pub fn generate_shades(color: Rgb, count: usize) -> Palette {
    let hsl = rgb_to_hsl(color);
    let span = palettes::SHADE_LIGHTNESS_MAX - palettes::SHADE_LIGHTNESS_MIN;

    (0..count)
        .map(|i| {
            let lightness = palettes::SHADE_LIGHTNESS_MIN + step_fraction(i, count) * span;
            hsl_to_rgb(f64::from(hsl.h), f64::from(hsl.s), lightness)
        })
        .collect()
}

/// `count` colors sharing the hue and lightness of `color`, with saturation
/// walking linearly from the original value down to zero.
pub fn generate_tints(color: Rgb, count: usize) -> Palette {
    let hsl = rgb_to_hsl(color);
    let saturation = f64::from(hsl.s);

    (0..count)
        .map(|i| {
            let s = saturation - step_fraction(i, count) * saturation;
            hsl_to_rgb(f64::from(hsl.h), s, f64::from(hsl.l))
        })
        .collect()
}

/// Per-channel linear interpolation. `ratio` is the weight of `second` in
/// percent and is clamped to `[0, 100]`; NaN counts as 0.
pub fn mix_colors(first: Rgb, second: Rgb, ratio: f64) -> Rgb {
    let t = if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 100.0) / 100.0
    };

    let lerp = |a: u8, b: u8| clamp_channel(f64::from(a) * (1.0 - t) + f64::from(b) * t);

    Rgb::new(
        lerp(first.r, second.r),
        lerp(first.g, second.g),
        lerp(first.b, second.b),
    )
}
