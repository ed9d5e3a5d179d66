//! Color value types
//!
//! [`Rgb`] is the canonical representation: three 8-bit channels. Every other
//! representation ([`Hsl`], [`Hsv`], [`Cmyk`], hex strings) is a view derived
//! on demand. Alpha is tracked separately as an [`Alpha`] percentage and never
//! folded into the RGB triple.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Result, SwatchError};

/// 8-bit sRGB color. The default value is black.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array in R, G, B order
    #[inline]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Canonical `#RRGGBB` representation with uppercase digits
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Uniformly random color in `#000000..=#FFFFFE`.
    ///
    /// The upper bound matches the classic `floor(random() * 0xFFFFFF)` idiom,
    /// so pure white is never produced.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let value: u32 = rng.gen_range(0..0x00FF_FFFF);
        Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Strict hex parsing: an optional leading `#` followed by exactly six hex
/// digits in either case. Use [`hex_to_rgb`](crate::color::hex_to_rgb) for the
/// lenient variant that resolves malformed input to black.
impl FromStr for Rgb {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        if digits.len() != 6 {
            return Err(SwatchError::invalid_hex(
                s,
                format!("expected 6 hex digits, got {}", digits.len()),
            ));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SwatchError::invalid_hex(s, "non-hex digit"));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| SwatchError::invalid_hex(s, e.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for Srgb<u8> {
    fn from(color: Rgb) -> Self {
        Srgb::new(color.r, color.g, color.b)
    }
}

impl From<Srgb<u8>> for Rgb {
    fn from(srgb: Srgb<u8>) -> Self {
        Self::new(srgb.red, srgb.green, srgb.blue)
    }
}

/// Display-rounded HSL: hue in degrees `[0, 360)`, saturation and lightness in
/// whole percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Display-rounded HSV: hue in degrees `[0, 360)`, saturation and value in
/// whole percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({}, {}%, {}%)", self.h, self.s, self.v)
    }
}

/// Display-rounded CMYK, each component in whole percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cmyk({}%, {}%, {}%, {}%)", self.c, self.m, self.y, self.k)
    }
}

/// Opacity as a whole percentage in `[0, 100]`.
///
/// Formats as a two-decimal fraction (`0.50`), the form used by `rgba()` and
/// `hsla()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", from = "u8")]
pub struct Alpha(u8);

impl Alpha {
    pub const OPAQUE: Alpha = Alpha(100);
    pub const TRANSPARENT: Alpha = Alpha(0);

    /// Creates an alpha from a percentage, clamping values above 100
    #[inline]
    pub const fn new(percent: u8) -> Self {
        if percent > 100 {
            Self(100)
        } else {
            Self(percent)
        }
    }

    /// Creates an alpha from a fraction in `[0, 1]`, rounding to whole percent.
    /// Out-of-range and NaN inputs are clamped.
    pub fn from_fraction(fraction: f64) -> Self {
        let percent = (fraction * 100.0).round();
        if percent.is_nan() {
            return Self::TRANSPARENT;
        }
        Self(percent.clamp(0.0, 100.0) as u8)
    }

    #[inline]
    pub const fn percent(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

/// Clamps like [`Alpha::new`]; deserialization goes through this
impl From<u8> for Alpha {
    fn from(percent: u8) -> Self {
        Self::new(percent)
    }
}

impl From<Alpha> for u8 {
    fn from(alpha: Alpha) -> Self {
        alpha.0
    }
}

impl Default for Alpha {
    fn default() -> Self {
        Self::OPAQUE
    }
}

impl fmt::Display for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.fraction())
    }
}
