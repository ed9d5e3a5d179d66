//! Color-vision-deficiency simulation
//!
//! Each deficiency is a fixed linear mix of the R, G, B channels. These are
//! coarse approximations intended for previewing palettes, not a clinical
//! model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::conversion::clamp_channel;
use crate::color::Rgb;
use crate::constants::vision;
use crate::{Result, SwatchError};

/// Simulated dichromacy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deficiency {
    /// Red-blind
    Protanopia,
    /// Green-blind
    Deuteranopia,
    /// Blue-blind
    Tritanopia,
}

impl Deficiency {
    pub const ALL: [Deficiency; 3] = [
        Deficiency::Protanopia,
        Deficiency::Deuteranopia,
        Deficiency::Tritanopia,
    ];

    /// Channel-mixing matrix, rows produce R', G', B'
    pub const fn matrix(self) -> [[f64; 3]; 3] {
        match self {
            Deficiency::Protanopia => vision::PROTANOPIA,
            Deficiency::Deuteranopia => vision::DEUTERANOPIA,
            Deficiency::Tritanopia => vision::TRITANOPIA,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Deficiency::Protanopia => "protanopia",
            Deficiency::Deuteranopia => "deuteranopia",
            Deficiency::Tritanopia => "tritanopia",
        }
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Deficiency {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        Deficiency::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SwatchError::invalid_parameter("deficiency", s))
    }
}

/// Simulate how `color` appears under `kind`. Channels are rounded and clamped.
pub fn simulate_color_blindness(color: Rgb, kind: Deficiency) -> Rgb {
    let input = color.channels().map(f64::from);
    let [r, g, b] = kind.matrix().map(|row| {
        let mixed: f64 = row.iter().zip(input).map(|(weight, channel)| weight * channel).sum();
        clamp_channel(mixed)
    });
    Rgb::new(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protanopia_red() {
        // R' = 0.567 * 255, G' = 0.558 * 255, B' = 0
        assert_eq!(
            simulate_color_blindness(Rgb::new(255, 0, 0), Deficiency::Protanopia),
            Rgb::new(145, 142, 0)
        );
    }

    #[test]
    fn test_deuteranopia_green() {
        assert_eq!(
            simulate_color_blindness(Rgb::new(0, 255, 0), Deficiency::Deuteranopia),
            Rgb::new(96, 77, 77)
        );
    }

    #[test]
    fn test_tritanopia_blue() {
        assert_eq!(
            simulate_color_blindness(Rgb::new(0, 0, 255), Deficiency::Tritanopia),
            Rgb::new(0, 145, 134)
        );
    }

    #[test]
    fn test_neutrals_are_preserved() {
        for kind in Deficiency::ALL {
            for v in [0u8, 64, 128, 200, 255] {
                let gray = Rgb::new(v, v, v);
                assert_eq!(simulate_color_blindness(gray, kind), gray, "{kind} {v}");
            }
        }
    }

    #[test]
    fn test_parse_deficiency() {
        assert_eq!("Protanopia".parse::<Deficiency>().unwrap(), Deficiency::Protanopia);
        assert_eq!(" tritanopia ".parse::<Deficiency>().unwrap(), Deficiency::Tritanopia);
        assert!("achromatopsia".parse::<Deficiency>().is_err());
    }
}
