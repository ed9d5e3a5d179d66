//! Palette and harmony generation
//!
//! Generators take a seed color and return an ordered [`Palette`]:
//! - shades (lightness walk) and tints (saturation walk)
//! - two-color mixing
//! - the six named harmony schemes
//! - multi-stop gradients
//! - curated presets

pub mod gradient;
pub mod presets;
pub mod scheme;
pub mod shades;

use crate::color::Rgb;

pub use gradient::{generate_gradient, GradientSpec};
pub use presets::{popular_palettes, preset, NamedPalette};
pub use scheme::{generate_harmony, HarmonyScheme};
pub use shades::{generate_shades, generate_tints, mix_colors};

/// Ordered sequence of colors. Duplicates are allowed.
pub type Palette = Vec<Rgb>;

/// Canonical hex strings for a palette, in order
pub fn to_hex_strings(palette: &[Rgb]) -> Vec<String> {
    palette.iter().map(|color| color.to_hex()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_strings_keeps_order() {
        let palette = generate_harmony(Rgb::new(255, 0, 0), HarmonyScheme::Triadic);
        assert_eq!(to_hex_strings(&palette), vec!["#FF0000", "#00FF00", "#0000FF"]);
        assert!(to_hex_strings(&[]).is_empty());
    }
}
