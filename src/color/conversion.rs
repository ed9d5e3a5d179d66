//! Color space conversion utilities
//!
//! Provides the canonical conversions around [`Rgb`]:
//! - hex strings (lenient parse with a black fallback)
//! - HSL and HSV, both display-rounded and unrounded
//! - CMYK
//! - CIE Lab through the `palette` crate, for perceptual distances
//!
//! No function in this module fails. Out-of-range numeric input is clamped and
//! unparseable hex resolves to black.

use palette::{FromColor, Lab, Srgb};

use super::model::{Cmyk, Hsl, Hsv, Rgb};

/// Round and clamp a floating-point channel into `[0, 255]`. NaN maps to 0.
#[inline]
pub(crate) fn clamp_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

/// Parse a hex color, resolving malformed input to black.
///
/// Accepts exactly six hex digits in either case, with an optional leading
/// `#`. Anything else, including partially typed values such as `#A`, yields
/// `Rgb(0, 0, 0)`.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    match hex.parse::<Rgb>() {
        Ok(color) => color,
        Err(e) => {
            log::warn!("falling back to black: {e}");
            Rgb::BLACK
        }
    }
}

/// Format channels as `#RRGGBB`. Each channel is rounded to the nearest integer
/// and clamped to `[0, 255]` independently.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    Rgb::new(clamp_channel(r), clamp_channel(g), clamp_channel(b)).to_hex()
}

/// Normalized channels with their max and min
fn normalized(color: Rgb) -> ([f64; 3], f64, f64) {
    let [r, g, b] = color.channels().map(|c| f64::from(c) / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    ([r, g, b], max, min)
}

/// Hue as a fraction of a turn in `[0, 1)`; zero for achromatic colors
fn hue_fraction([r, g, b]: [f64; 3], max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }

    let sector = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    sector / 6.0
}

/// Round a hue fraction to whole degrees in `[0, 360)`
#[inline]
fn round_hue(fraction: f64) -> u16 {
    ((fraction * 360.0).round() as u16) % 360
}

#[inline]
fn round_percent(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Unrounded HSL: hue in degrees `[0, 360)`, saturation and lightness in percent
pub fn rgb_to_hsl_exact(color: Rgb) -> (f64, f64, f64) {
    let (channels, max, min) = normalized(color);
    let delta = max - min;
    let l = (max + min) / 2.0;

    let s = if delta == 0.0 {
        0.0
    } else if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    (hue_fraction(channels, max, delta) * 360.0, s * 100.0, l * 100.0)
}

/// Display-rounded HSL
pub fn rgb_to_hsl(color: Rgb) -> Hsl {
    let (channels, max, min) = normalized(color);
    let (_, s, l) = rgb_to_hsl_exact(color);
    Hsl {
        h: round_hue(hue_fraction(channels, max, max - min)),
        s: round_percent(s / 100.0),
        l: round_percent(l / 100.0),
    }
}

/// Unrounded HSV: hue in degrees `[0, 360)`, saturation and value in percent
pub fn rgb_to_hsv_exact(color: Rgb) -> (f64, f64, f64) {
    let (channels, max, min) = normalized(color);
    let delta = max - min;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    (hue_fraction(channels, max, delta) * 360.0, s * 100.0, max * 100.0)
}

/// Display-rounded HSV
pub fn rgb_to_hsv(color: Rgb) -> Hsv {
    let (channels, max, min) = normalized(color);
    let (_, s, v) = rgb_to_hsv_exact(color);
    Hsv {
        h: round_hue(hue_fraction(channels, max, max - min)),
        s: round_percent(s / 100.0),
        v: round_percent(v / 100.0),
    }
}

/// HSL to RGB. Hue is in degrees and wraps; saturation and lightness are
/// percentages and are clamped to `[0, 100]`. Fractional inputs are accepted.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h.rem_euclid(360.0);
    let s = s.clamp(0.0, 100.0) / 100.0;
    let l = l.clamp(0.0, 100.0) / 100.0;
    let a = s * l.min(1.0 - l);

    let channel = |n: f64| {
        let k = (n + h / 30.0).rem_euclid(12.0);
        let value = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        clamp_channel(value * 255.0)
    };

    Rgb::new(channel(0.0), channel(8.0), channel(4.0))
}

/// HSL to canonical hex, see [`hsl_to_rgb`]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    hsl_to_rgb(h, s, l).to_hex()
}

/// HSV to RGB. Hue is in degrees and wraps; saturation and value are
/// percentages and are clamped to `[0, 100]`.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let h = h.rem_euclid(360.0) / 60.0;
    let s = s.clamp(0.0, 100.0) / 100.0;
    let v = v.clamp(0.0, 100.0) / 100.0;

    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    // rem_euclid may round up to exactly 360, which lands in sector 6
    let (r, g, b) = match sector as u8 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::new(
        clamp_channel(r * 255.0),
        clamp_channel(g * 255.0),
        clamp_channel(b * 255.0),
    )
}

/// RGB to display-rounded CMYK. Pure black is `cmyk(0%, 0%, 0%, 100%)`.
pub fn rgb_to_cmyk(color: Rgb) -> Cmyk {
    let (channels, max, _) = normalized(color);
    let k = 1.0 - max;

    let [c, m, y] = if max == 0.0 {
        [0.0; 3]
    } else {
        channels.map(|channel| (1.0 - channel - k) / (1.0 - k))
    };

    Cmyk {
        c: round_percent(c),
        m: round_percent(m),
        y: round_percent(y),
        k: round_percent(k),
    }
}

/// Convert to CIE Lab (D65)
pub fn rgb_to_lab(color: Rgb) -> Lab {
    let srgb: Srgb = Srgb::<u8>::from(color).into_format();
    Lab::from_color(srgb)
}

/// CIE76 color difference: Euclidean distance in Lab
pub fn delta_e(a: Rgb, b: Rgb) -> f32 {
    let lab1 = rgb_to_lab(a);
    let lab2 = rgb_to_lab(b);
    let dl = lab1.l - lab2.l;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    (dl * dl + da * da + db * db).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn within_one(a: Rgb, b: Rgb) -> bool {
        a.channels()
            .iter()
            .zip(b.channels())
            .all(|(x, y)| x.abs_diff(y) <= 1)
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#FF0000"), Rgb::new(255, 0, 0));
        assert_eq!(hex_to_rgb("00ff00"), Rgb::new(0, 255, 0)); // Without #
        assert_eq!(hex_to_rgb("#3b82F6"), Rgb::new(59, 130, 246));
    }

    #[test]
    fn test_hex_to_rgb_fallback() {
        assert_eq!(hex_to_rgb("#A"), Rgb::BLACK); // Keystroke in progress
        assert_eq!(hex_to_rgb("#GGGGGG"), Rgb::BLACK);
        assert_eq!(hex_to_rgb(""), Rgb::BLACK);
        assert_eq!(hex_to_rgb("#FF00001"), Rgb::BLACK);
    }

    #[test]
    fn test_rgb_to_hex_rounds_and_clamps() {
        assert_eq!(rgb_to_hex(255.0, 0.0, 0.0), "#FF0000");
        assert_eq!(rgb_to_hex(127.5, 0.4, 254.6), "#8000FF");
        assert_eq!(rgb_to_hex(-20.0, 300.0, f64::NAN), "#00FF00");
    }

    #[test]
    fn test_hex_round_trip_exhaustive_per_channel() {
        for v in 0..=255u8 {
            let color = Rgb::new(v, 255 - v, v / 2);
            assert_eq!(hex_to_rgb(&color.to_hex()), color);
        }
    }

    #[test]
    fn test_rgb_to_hsl_reference_colors() {
        assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 0)), Hsl { h: 0, s: 100, l: 50 });
        assert_eq!(rgb_to_hsl(Rgb::new(0, 255, 255)), Hsl { h: 180, s: 100, l: 50 });
        assert_eq!(rgb_to_hsl(Rgb::new(128, 128, 128)), Hsl { h: 0, s: 0, l: 50 });
        assert_eq!(rgb_to_hsl(Rgb::new(59, 130, 246)), Hsl { h: 217, s: 91, l: 60 });
    }

    #[test]
    fn test_hue_wraps_below_360() {
        // Raw hue is 359.76 degrees, which rounds to 360
        let hsl = rgb_to_hsl(Rgb::new(255, 0, 1));
        assert_eq!(hsl.h, 0);
        let hsv = rgb_to_hsv(Rgb::new(255, 0, 1));
        assert_eq!(hsv.h, 0);
    }

    #[test]
    fn test_rgb_to_hsv_reference_colors() {
        assert_eq!(rgb_to_hsv(Rgb::new(255, 0, 0)), Hsv { h: 0, s: 100, v: 100 });
        assert_eq!(rgb_to_hsv(Rgb::BLACK), Hsv { h: 0, s: 0, v: 0 });
        assert_eq!(rgb_to_hsv(Rgb::new(59, 130, 246)), Hsv { h: 217, s: 76, v: 96 });
    }

    #[test]
    fn test_hsl_to_hex() {
        assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#FF0000");
        assert_eq!(hsl_to_hex(180.0, 100.0, 50.0), "#00FFFF");
        assert_eq!(hsl_to_hex(540.0, 100.0, 50.0), "#00FFFF"); // Wraps
        assert_eq!(hsl_to_hex(-180.0, 100.0, 50.0), "#00FFFF");
        assert_eq!(hsl_to_hex(0.0, 0.0, 100.0), "#FFFFFF");
        assert_eq!(hsl_to_hex(0.0, 0.0, 0.0), "#000000");
    }

    #[test]
    fn test_hsv_to_rgb() {
        assert_eq!(hsv_to_rgb(0.0, 100.0, 100.0), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(120.0, 100.0, 100.0), Rgb::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(240.0, 100.0, 100.0), Rgb::new(0, 0, 255));
        assert_eq!(hsv_to_rgb(360.0, 100.0, 100.0), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(-1e-14, 100.0, 100.0), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(0.0, 0.0, 50.0), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_hsl_hsv_round_trip_within_one() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(17) {
                for b in (0..=255u8).step_by(51) {
                    let color = Rgb::new(r, g, b);

                    let (h, s, l) = rgb_to_hsl_exact(color);
                    assert!(within_one(hsl_to_rgb(h, s, l), color), "hsl {color}");

                    let (h, s, v) = rgb_to_hsv_exact(color);
                    assert!(within_one(hsv_to_rgb(h, s, v), color), "hsv {color}");
                }
            }
        }
    }

    #[test]
    fn test_rgb_to_cmyk() {
        assert_eq!(rgb_to_cmyk(Rgb::BLACK), Cmyk { c: 0, m: 0, y: 0, k: 100 });
        assert_eq!(rgb_to_cmyk(Rgb::WHITE), Cmyk { c: 0, m: 0, y: 0, k: 0 });
        assert_eq!(rgb_to_cmyk(Rgb::new(255, 0, 0)), Cmyk { c: 0, m: 100, y: 100, k: 0 });
        assert_eq!(rgb_to_cmyk(Rgb::new(59, 130, 246)), Cmyk { c: 76, m: 47, y: 0, k: 4 });
    }

    #[test]
    fn test_rgb_to_lab() {
        let black = rgb_to_lab(Rgb::BLACK);
        assert!(black.l < 1.0);

        let white = rgb_to_lab(Rgb::WHITE);
        assert!(white.l > 99.0);
        assert!(white.a.abs() < 1.0);
        assert!(white.b.abs() < 1.0);
    }

    #[test]
    fn test_delta_e() {
        let color = Rgb::new(59, 130, 246);
        assert!(delta_e(color, color) < 0.001);
        assert!(delta_e(Rgb::BLACK, Rgb::WHITE) > 99.0);
        assert!(delta_e(Rgb::new(255, 0, 0), Rgb::new(250, 5, 5)) < 5.0);
    }
}
