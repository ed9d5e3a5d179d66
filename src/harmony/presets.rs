//! Curated preset palettes

use serde::{Deserialize, Serialize};

use crate::color::{hex_to_rgb, Rgb};
use crate::constants::POPULAR_PALETTES;

/// A palette with a display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedPalette {
    pub name: String,
    pub colors: Vec<Rgb>,
}

impl NamedPalette {
    pub fn new(name: impl Into<String>, colors: Vec<Rgb>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }
}

/// The built-in preset palettes, in display order
pub fn popular_palettes() -> Vec<NamedPalette> {
    POPULAR_PALETTES
        .iter()
        .map(|(name, colors)| {
            NamedPalette::new(*name, colors.iter().map(|hex| hex_to_rgb(hex)).collect())
        })
        .collect()
}

/// Look up a preset by name, ignoring case
pub fn preset(name: &str) -> Option<NamedPalette> {
    popular_palettes()
        .into_iter()
        .find(|palette| palette.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_parse_cleanly() {
        let palettes = popular_palettes();
        assert_eq!(palettes.len(), 8);
        for palette in &palettes {
            assert_eq!(palette.colors.len(), 5, "{}", palette.name);
            // Lenient parsing would turn a typo into black
            assert!(!palette.colors.contains(&Rgb::BLACK), "{}", palette.name);
        }
    }

    #[test]
    fn test_preset_lookup() {
        let ocean = preset("ocean").unwrap();
        assert_eq!(ocean.name, "Ocean");
        assert_eq!(ocean.colors[0], Rgb::new(0x1A, 0x53, 0x5C));
        assert!(preset("Vaporwave").is_none());
    }
}
