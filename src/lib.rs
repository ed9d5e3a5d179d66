//! # Swatchbook
//!
//! A color-science engine for picking, describing and combining colors.
//!
//! This library provides:
//! - Conversion between hex, RGB, HSL, HSV and CMYK, plus heuristic color names
//! - Shades, tints, mixing, harmony schemes and multi-stop gradients
//! - WCAG contrast scoring and color-vision-deficiency simulation
//! - Dominant palette extraction from images
//!
//! ## Example
//!
//! ```rust
//! use swatchbook::{describe_color, generate_harmony, HarmonyScheme, Rgb};
//!
//! let formats = describe_color("#3B82F6", None);
//! assert_eq!(formats.hsl, "hsl(217, 91%, 60%)");
//!
//! let seed: Rgb = "#3B82F6".parse()?;
//! let triad = generate_harmony(seed, HarmonyScheme::Triadic);
//! assert_eq!(triad.len(), 3);
//! # Ok::<(), swatchbook::SwatchError>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod analysis;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod extraction;
pub mod harmony;
pub mod image_loader;
pub mod logging;
pub mod sampler;

pub use analysis::{
    check_contrast, contrast_ratio, readable_text_color, relative_luminance,
    simulate_color_blindness, ContrastResult, Deficiency,
};
pub use color::{
    closest_named_color, color_name, hex_to_rgb, hsl_to_hex, hsl_to_rgb, hsv_to_rgb, rgb_to_cmyk,
    rgb_to_hex, rgb_to_hsl, rgb_to_hsv, Alpha, Cmyk, Hsl, Hsv, Rgb,
};
pub use config::EngineConfig;
pub use error::{Result, SwatchError};
pub use export::{PaletteExport, SavedColor, SavedPalette};
pub use extraction::{extract_palette, PaletteExtractor, PixelBuffer};
pub use harmony::{
    generate_gradient, generate_harmony, generate_shades, generate_tints, mix_colors,
    GradientSpec, HarmonyScheme, Palette,
};

/// Every textual representation of one color, ready for display or copying
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorFormats {
    /// Canonical `#RRGGBB`
    pub hex: String,
    /// `rgb(r, g, b)`
    pub rgb: String,
    /// `rgba(r, g, b, a)`, present when an alpha was given
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rgba: Option<String>,
    /// `hsl(h, s%, l%)`
    pub hsl: String,
    /// `hsla(h, s%, l%, a)`, present when an alpha was given
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub hsla: Option<String>,
    /// `hsv(h, s%, v%)`
    pub hsv: String,
    /// `cmyk(c%, m%, y%, k%)`
    pub cmyk: String,
    /// Heuristic color name
    pub name: String,
}

impl ColorFormats {
    pub fn new(color: Rgb, alpha: Option<Alpha>) -> Self {
        let hex = color.to_hex();
        let name = color_name(&hex);
        Self::build(color, hex, name, alpha)
    }

    /// Describe a hex string. Malformed input describes black; a name from
    /// the named-color table matches the input case-insensitively.
    pub fn from_hex(hex: &str, alpha: Option<Alpha>) -> Self {
        let color = hex_to_rgb(hex);
        Self::build(color, color.to_hex(), color_name(hex), alpha)
    }

    fn build(color: Rgb, hex: String, name: String, alpha: Option<Alpha>) -> Self {
        let Rgb { r, g, b } = color;
        let hsl = rgb_to_hsl(color);

        Self {
            hex,
            rgb: format!("rgb({r}, {g}, {b})"),
            rgba: alpha.map(|a| format!("rgba({r}, {g}, {b}, {a})")),
            hsl: hsl.to_string(),
            hsla: alpha.map(|a| format!("hsla({}, {}%, {}%, {a})", hsl.h, hsl.s, hsl.l)),
            hsv: rgb_to_hsv(color).to_string(),
            cmyk: rgb_to_cmyk(color).to_string(),
            name,
        }
    }
}

/// Describe a color given as hex, in every supported format
///
/// This is the main entry point for color display. It never fails: malformed
/// hex falls back to black.
///
/// # Arguments
///
/// * `hex` - Color as `#RRGGBB`, leading `#` optional
/// * `alpha` - Opacity to include as `rgba`/`hsla` forms
pub fn describe_color(hex: &str, alpha: Option<Alpha>) -> ColorFormats {
    ColorFormats::from_hex(hex, alpha)
}
