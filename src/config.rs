//! Configuration structures for the swatchbook engine.
//!
//! This module defines the tunable parameters of the engine, organized into
//! logical groups for extraction, palette generation and gradients.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use swatchbook::EngineConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = EngineConfig::from_json_file(Path::new("swatchbook.json"))?;
//!
//! // Or use defaults
//! let config = EngineConfig::default();
//! # Ok::<(), swatchbook::SwatchError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`ExtractionConfig`]: Sampling stride, palette size and image downscaling
//! - [`PaletteConfig`]: Shade and tint counts
//! - [`GradientConfig`]: Gradient step count and CSS angle
//!
//! Missing sections and fields fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::constants::{extraction, gradient, palettes};
use crate::error::{Result, SwatchError};
use crate::export::css_linear_gradient;
use crate::harmony::{generate_gradient, generate_shades, generate_tints, Palette};

/// Complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Image palette extraction
    pub extraction: ExtractionConfig,

    /// Shade and tint generation
    pub palette: PaletteConfig,

    /// Gradient generation
    pub gradient: GradientConfig,
}

/// Image palette extraction parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Examine every n-th pixel
    pub sample_stride: usize,

    /// Number of dominant colors to return
    pub top_k: usize,

    /// Longest image side after downscaling (0 = never downscale)
    pub max_dimension: u32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            sample_stride: extraction::DEFAULT_SAMPLE_STRIDE,
            top_k: extraction::DEFAULT_TOP_K,
            max_dimension: extraction::DEFAULT_MAX_DIMENSION,
        }
    }
}

/// Shade and tint generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub shade_count: usize,
    pub tint_count: usize,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            shade_count: palettes::DEFAULT_SHADE_COUNT,
            tint_count: palettes::DEFAULT_TINT_COUNT,
        }
    }
}

impl PaletteConfig {
    /// `shade_count` shades of `color`, darkest first
    pub fn shades(&self, color: Rgb) -> Palette {
        generate_shades(color, self.shade_count)
    }

    /// `tint_count` tints of `color`, most saturated first
    pub fn tints(&self, color: Rgb) -> Palette {
        generate_tints(color, self.tint_count)
    }
}

/// Gradient generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientConfig {
    /// Number of sampled colors, at least 2
    pub steps: usize,

    /// Angle of the generated CSS linear gradient
    pub angle_degrees: u16,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            steps: gradient::DEFAULT_STEPS,
            angle_degrees: gradient::DEFAULT_ANGLE_DEGREES,
        }
    }
}

impl GradientConfig {
    /// Sample `steps` colors through `stops`
    pub fn sample(&self, stops: &[Rgb]) -> Palette {
        generate_gradient(stops, self.steps)
    }

    /// CSS linear gradient over the sampled colors at `angle_degrees`
    pub fn css(&self, stops: &[Rgb]) -> String {
        css_linear_gradient(&self.sample(stops), self.angle_degrees)
    }
}

impl EngineConfig {
    /// Reject values the generators cannot use
    ///
    /// # Errors
    ///
    /// Returns `SwatchError::InvalidParameter` naming the first offending field
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("extraction.sample_stride", self.extraction.sample_stride, 1),
            ("extraction.top_k", self.extraction.top_k, 1),
            ("palette.shade_count", self.palette.shade_count, 1),
            ("palette.tint_count", self.palette.tint_count, 1),
            ("gradient.steps", self.gradient.steps, gradient::MIN_STEPS),
        ];

        for (name, value, min) in checks {
            if value < min {
                return Err(SwatchError::invalid_parameter(name, value));
            }
        }
        Ok(())
    }

    /// Load and validate configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SwatchError::config(format!("Failed to read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            SwatchError::config(format!("Failed to parse {}", path.display()), e)
        })?;
        config.validate()?;

        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SwatchError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            SwatchError::config(format!("Failed to write {}", path.display()), e)
        })?;

        log::debug!("saved configuration to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.extraction.sample_stride, 10);
        assert_eq!(config.extraction.top_k, 8);
        assert_eq!(config.extraction.max_dimension, 500);
        assert_eq!(config.palette.shade_count, 5);
        assert_eq!(config.gradient.steps, 5);
        assert_eq!(config.gradient.angle_degrees, 90);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_degenerate_values() {
        let mut config = EngineConfig::default();
        config.gradient.steps = 1;
        assert!(matches!(
            config.validate(),
            Err(SwatchError::InvalidParameter { ref parameter, .. }) if parameter == "gradient.steps"
        ));

        let mut config = EngineConfig::default();
        config.extraction.sample_stride = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_palette_section_drives_generation() {
        let seed = Rgb::new(0x3B, 0x82, 0xF6);
        let mut config = EngineConfig::default();
        assert_eq!(config.palette.shades(seed).len(), 5);
        assert_eq!(config.palette.tints(seed).len(), 5);

        config.palette.shade_count = 9;
        config.palette.tint_count = 3;
        assert_eq!(config.palette.shades(seed), generate_shades(seed, 9));
        assert_eq!(config.palette.tints(seed).len(), 3);
        assert_eq!(config.palette.tints(seed), generate_tints(seed, 3));
    }

    #[test]
    fn test_gradient_section_drives_css() {
        let stops = [Rgb::BLACK, Rgb::WHITE];
        let mut config = EngineConfig::default();
        assert_eq!(config.gradient.sample(&stops).len(), 5);

        config.gradient.steps = 3;
        config.gradient.angle_degrees = 45;
        assert_eq!(
            config.gradient.css(&stops),
            "background: linear-gradient(45deg, #000000, #808080, #FFFFFF);"
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"extraction": {"top_k": 4}}"#).unwrap();
        assert_eq!(config.extraction.top_k, 4);
        assert_eq!(config.extraction.sample_stride, 10);
        assert_eq!(config.palette, PaletteConfig::default());
    }

    #[test]
    fn test_json_file_round_trip() {
        let path = std::env::temp_dir().join(format!("swatchbook-config-{}.json", std::process::id()));
        let mut config = EngineConfig::default();
        config.gradient.angle_degrees = 45;

        config.to_json_file(&path).unwrap();
        let loaded = EngineConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = EngineConfig::from_json_file(Path::new("/nonexistent/swatchbook.json"));
        assert!(matches!(result, Err(SwatchError::ConfigError { .. })));
    }
}
