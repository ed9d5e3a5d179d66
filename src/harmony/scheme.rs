//! Color harmony schemes
//!
//! Each scheme rotates the seed's hue by fixed offsets while holding its
//! saturation and lightness. The output order is part of the contract:
//! analogous places the seed in the middle, every other rotating scheme
//! places it first, and monochromatic returns shades from darkest to lightest.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{hsl_to_rgb, rgb_to_hsl, Rgb};
use crate::constants::palettes;
use crate::{Result, SwatchError};

use super::shades::generate_shades;
use super::Palette;

/// Named harmony scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyScheme {
    Complementary,
    Analogous,
    Triadic,
    SplitComplementary,
    Tetradic,
    Monochromatic,
}

impl HarmonyScheme {
    pub const ALL: [HarmonyScheme; 6] = [
        HarmonyScheme::Complementary,
        HarmonyScheme::Analogous,
        HarmonyScheme::Triadic,
        HarmonyScheme::SplitComplementary,
        HarmonyScheme::Tetradic,
        HarmonyScheme::Monochromatic,
    ];

    /// Hue offsets in degrees, in output order. `None` for monochromatic,
    /// which varies lightness instead of hue.
    pub const fn hue_offsets(self) -> Option<&'static [i16]> {
        match self {
            HarmonyScheme::Complementary => Some(&[0, 180]),
            HarmonyScheme::Analogous => Some(&[-30, 0, 30]),
            HarmonyScheme::Triadic => Some(&[0, 120, 240]),
            HarmonyScheme::SplitComplementary => Some(&[0, 150, 210]),
            HarmonyScheme::Tetradic => Some(&[0, 90, 180, 270]),
            HarmonyScheme::Monochromatic => None,
        }
    }

    /// Number of colors the scheme produces
    pub const fn color_count(self) -> usize {
        match self.hue_offsets() {
            Some(offsets) => offsets.len(),
            None => palettes::MONOCHROMATIC_COUNT,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            HarmonyScheme::Complementary => "complementary",
            HarmonyScheme::Analogous => "analogous",
            HarmonyScheme::Triadic => "triadic",
            HarmonyScheme::SplitComplementary => "split-complementary",
            HarmonyScheme::Tetradic => "tetradic",
            HarmonyScheme::Monochromatic => "monochromatic",
        }
    }
}

impl fmt::Display for HarmonyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HarmonyScheme {
    type Err = SwatchError;

    /// Accepts the kebab-case names plus `split` as a short form
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        if name == "split" {
            return Ok(HarmonyScheme::SplitComplementary);
        }
        HarmonyScheme::ALL
            .into_iter()
            .find(|scheme| scheme.as_str() == name)
            .ok_or_else(|| SwatchError::invalid_parameter("harmony scheme", s))
    }
}

/// Colors related to `seed` under `scheme`.
///
/// The seed itself is returned unchanged at offset 0; rotated colors use the
/// seed's display-rounded HSL.
pub fn generate_harmony(seed: Rgb, scheme: HarmonyScheme) -> Palette {
    let Some(offsets) = scheme.hue_offsets() else {
        return generate_shades(seed, palettes::MONOCHROMATIC_COUNT);
    };

    let hsl = rgb_to_hsl(seed);
    offsets
        .iter()
        .map(|&offset| {
            if offset == 0 {
                return seed;
            }
            let hue = (i32::from(hsl.h) + i32::from(offset)).rem_euclid(360);
            hsl_to_rgb(f64::from(hue), f64::from(hsl.s), f64::from(hsl.l))
        })
        .collect()
}
