//! Heuristic human-readable color names
//!
//! A name comes from an exact lookup in a table of canonical colors or, for
//! every other color, from three ordered rule lists over the rounded HSL view:
//! a lightness qualifier, a saturation qualifier and a hue bucket. Rules are
//! evaluated top to bottom and the first match wins.
//!
//! This is a best-effort heuristic, not a perceptual naming standard, but the
//! bucket boundaries are fixed and callers may depend on them.

use crate::constants::{naming, NAMED_COLORS};

use super::conversion::{delta_e, hex_to_rgb, rgb_to_hsl};
use super::model::{Hsl, Rgb};

/// Threshold test on a rounded HSL percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Above(u8),
    Below(u8),
}

impl Bound {
    #[inline]
    fn matches(self, value: u8) -> bool {
        match self {
            Bound::Above(limit) => value > limit,
            Bound::Below(limit) => value < limit,
        }
    }
}

/// Saturation outcome of a matching rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaturationLabel {
    /// The color is a gray: the hue bucket is skipped
    Gray(&'static str),
    /// The hue bucket is kept and prefixed with this qualifier
    Qualifier(&'static str),
}

/// Lightness qualifiers
pub const LIGHTNESS_RULES: [(Bound, &str); 4] = [
    (Bound::Above(naming::VERY_LIGHT_ABOVE), "Very Light"),
    (Bound::Above(naming::LIGHT_ABOVE), "Light"),
    (Bound::Below(naming::VERY_DARK_BELOW), "Very Dark"),
    (Bound::Below(naming::DARK_BELOW), "Dark"),
];

/// Saturation qualifiers
pub const SATURATION_RULES: [(Bound, SaturationLabel); 2] = [
    (Bound::Below(naming::GRAY_BELOW), SaturationLabel::Gray("Gray")),
    (Bound::Below(naming::GRAYISH_BELOW), SaturationLabel::Qualifier("Grayish")),
];

/// Hue buckets as `(exclusive upper bound in degrees, name)`. Red appears at
/// both ends because it wraps across 0°.
pub const HUE_BUCKETS: [(u16, &str); 9] = [
    (15, "Red"),
    (45, "Orange"),
    (75, "Yellow"),
    (150, "Green"),
    (210, "Cyan"),
    (270, "Blue"),
    (330, "Purple"),
    (345, "Pink"),
    (360, "Red"),
];

/// Color namer over immutable lookup tables
#[derive(Debug, Clone, Copy)]
pub struct ColorNamer {
    named: &'static [(&'static str, &'static str)],
    lightness: &'static [(Bound, &'static str)],
    saturation: &'static [(Bound, SaturationLabel)],
    hues: &'static [(u16, &'static str)],
}

impl Default for ColorNamer {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorNamer {
    /// Create a namer with the built-in tables
    pub const fn new() -> Self {
        Self {
            named: &NAMED_COLORS,
            lightness: &LIGHTNESS_RULES,
            saturation: &SATURATION_RULES,
            hues: &HUE_BUCKETS,
        }
    }

    /// Create a namer with a custom exact-match table, keeping the heuristic
    /// rules. Keys must be uppercase `#RRGGBB`.
    pub const fn with_named_colors(named: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            named,
            lightness: &LIGHTNESS_RULES,
            saturation: &SATURATION_RULES,
            hues: &HUE_BUCKETS,
        }
    }

    /// Name a hex string.
    ///
    /// The exact-match lookup uses the input as given (case-insensitive), so a
    /// string without `#` or a malformed string always goes through the
    /// heuristic, where malformed input is named as black would be by the
    /// rules ("Very Dark Gray").
    pub fn name(&self, hex: &str) -> String {
        if let Some(name) = self.lookup(hex) {
            return name.to_string();
        }
        self.describe(rgb_to_hsl(hex_to_rgb(hex)))
    }

    /// Name a color, checking the exact-match table first
    pub fn name_rgb(&self, color: Rgb) -> String {
        self.name(&color.to_hex())
    }

    fn lookup(&self, hex: &str) -> Option<&'static str> {
        self.named
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(hex))
            .map(|&(_, name)| name)
    }

    /// Synthesize a name from the rounded HSL view
    pub fn describe(&self, hsl: Hsl) -> String {
        let mut words: Vec<&str> = Vec::with_capacity(3);

        if let Some(&(_, label)) = self.lightness.iter().find(|(bound, _)| bound.matches(hsl.l)) {
            words.push(label);
        }

        match self.saturation.iter().find(|(bound, _)| bound.matches(hsl.s)) {
            Some(&(_, SaturationLabel::Gray(label))) => {
                words.push(label);
                return words.join(" ");
            }
            Some(&(_, SaturationLabel::Qualifier(label))) => words.push(label),
            None => {}
        }

        let hue = hsl.h % 360;
        let bucket = self
            .hues
            .iter()
            .find(|&&(upper, _)| hue < upper)
            .map_or("Red", |&(_, name)| name);
        words.push(bucket);

        words.join(" ")
    }

    /// Nearest entry of the exact-match table by CIE76 distance, with the
    /// distance
    pub fn closest_named(&self, color: Rgb) -> Option<(&'static str, f32)> {
        self.named
            .iter()
            .map(|&(hex, name)| (name, delta_e(color, hex_to_rgb(hex))))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// Name a hex string with the built-in tables
pub fn color_name(hex: &str) -> String {
    ColorNamer::new().name(hex)
}

/// Nearest built-in named color by CIE76 distance
pub fn closest_named_color(color: Rgb) -> (&'static str, f32) {
    ColorNamer::new()
        .closest_named(color)
        .unwrap_or(("Black", delta_e(color, Rgb::BLACK)))
}
