//! Dominant color extraction
//!
//! Samples a pixel buffer at a fixed stride, counts how often each exact color
//! occurs in the sample and returns the most frequent colors:
//! - sampling instead of a full scan keeps large images cheap
//! - counting is exact per 8-bit color, no quantization
//! - equal counts keep the order in which the colors were first sampled
//!
//! Algorithm tag: `algo-strided-frequency-palette`

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::config::ExtractionConfig;
use crate::constants::extraction::{DEFAULT_SAMPLE_STRIDE, DEFAULT_TOP_K};

use super::pixels::PixelBuffer;

/// A sampled color and how many sampled pixels had it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorFrequency {
    pub color: Rgb,
    pub count: usize,
}

/// Extraction result with sampling statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Most frequent colors first, at most `top_k` entries
    pub colors: Vec<ColorFrequency>,
    /// Number of pixels examined
    pub sampled_pixels: usize,
    /// Number of distinct colors among the sampled pixels
    pub distinct_colors: usize,
}

impl ExtractionResult {
    /// The colors alone, most frequent first
    pub fn palette(&self) -> Vec<Rgb> {
        self.colors.iter().map(|entry| entry.color).collect()
    }
}

/// Palette extractor implementing strided frequency counting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteExtractor {
    sample_stride: usize,
    top_k: usize,
}

impl Default for PaletteExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteExtractor {
    /// Create an extractor examining every 10th pixel and keeping 8 colors
    pub fn new() -> Self {
        Self {
            sample_stride: DEFAULT_SAMPLE_STRIDE,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Create an extractor with custom parameters. A stride of zero is
    /// treated as one (every pixel).
    pub fn with_params(sample_stride: usize, top_k: usize) -> Self {
        Self {
            sample_stride: sample_stride.max(1),
            top_k,
        }
    }

    /// Create an extractor from the extraction section of the engine config
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::with_params(config.sample_stride, config.top_k)
    }

    pub fn sample_stride(&self) -> usize {
        self.sample_stride
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Most frequent colors in `buffer`, most frequent first
    pub fn extract(&self, buffer: &PixelBuffer) -> Vec<Rgb> {
        self.analyze(buffer).palette()
    }

    /// Most frequent colors with their counts and sampling statistics
    pub fn analyze(&self, buffer: &PixelBuffer) -> ExtractionResult {
        let mut counts = self.count_colors(buffer);
        let sampled_pixels = counts.iter().map(|entry| entry.count).sum();
        let distinct_colors = counts.len();

        // Stable sort: ties stay in first-seen order
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts.truncate(self.top_k);

        log::debug!(
            "sampled {sampled_pixels} of {} pixels (stride {}), {distinct_colors} distinct colors",
            buffer.pixel_count(),
            self.sample_stride,
        );

        ExtractionResult {
            colors: counts,
            sampled_pixels,
            distinct_colors,
        }
    }

    /// Frequency table in first-seen order
    fn count_colors(&self, buffer: &PixelBuffer) -> Vec<ColorFrequency> {
        let mut index: HashMap<Rgb, usize> = HashMap::new();
        let mut counts: Vec<ColorFrequency> = Vec::new();

        for pixel in (0..buffer.pixel_count()).step_by(self.sample_stride) {
            let Some(color) = buffer.color_at_index(pixel) else {
                break;
            };

            match index.get(&color) {
                Some(&slot) => counts[slot].count += 1,
                None => {
                    index.insert(color, counts.len());
                    counts.push(ColorFrequency { color, count: 1 });
                }
            }
        }

        counts
    }
}

/// Extract the top 8 colors, sampling every 10th pixel
pub fn extract_palette(buffer: &PixelBuffer) -> Vec<Rgb> {
    PaletteExtractor::new().extract(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_from(colors: &[Rgb]) -> PixelBuffer {
        let data = colors
            .iter()
            .flat_map(|c| [c.r, c.g, c.b, 255])
            .collect::<Vec<u8>>();
        PixelBuffer::new(colors.len() as u32, 1, data).unwrap()
    }

    #[test]
    fn test_extractor_creation() {
        let extractor = PaletteExtractor::new();
        assert_eq!(extractor.sample_stride(), DEFAULT_SAMPLE_STRIDE);
        assert_eq!(extractor.top_k(), DEFAULT_TOP_K);
    }

    #[test]
    fn test_extractor_custom_params() {
        let extractor = PaletteExtractor::with_params(3, 4);
        assert_eq!(extractor.sample_stride(), 3);
        assert_eq!(extractor.top_k(), 4);
        assert_eq!(PaletteExtractor::with_params(0, 4).sample_stride(), 1);
    }

    #[test]
    fn test_uniform_image() {
        let color = Rgb::new(0x11, 0x22, 0x33);
        let buffer = PixelBuffer::filled(40, 30, color).unwrap();
        let result = PaletteExtractor::new().analyze(&buffer);

        assert_eq!(result.palette(), vec![color]);
        assert_eq!(result.sampled_pixels, 120);
        assert_eq!(result.distinct_colors, 1);
    }

    #[test]
    fn test_empty_image() {
        let buffer = PixelBuffer::new(0, 0, Vec::new()).unwrap();
        let result = PaletteExtractor::new().analyze(&buffer);
        assert!(result.colors.is_empty());
        assert_eq!(result.sampled_pixels, 0);
    }

    #[test]
    fn test_stride_selects_every_nth_pixel() {
        // Only indices 0, 10 and 20 are examined
        let mut colors = vec![Rgb::WHITE; 25];
        colors[0] = Rgb::new(1, 1, 1);
        colors[10] = Rgb::new(2, 2, 2);
        colors[20] = Rgb::new(2, 2, 2);

        let result = PaletteExtractor::new().analyze(&buffer_from(&colors));
        assert_eq!(result.sampled_pixels, 3);
        assert_eq!(
            result.colors,
            vec![
                ColorFrequency { color: Rgb::new(2, 2, 2), count: 2 },
                ColorFrequency { color: Rgb::new(1, 1, 1), count: 1 },
            ]
        );
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let a = Rgb::new(10, 0, 0);
        let b = Rgb::new(0, 10, 0);
        let c = Rgb::new(0, 0, 10);
        let buffer = buffer_from(&[c, a, b, a, b, c]);

        let extractor = PaletteExtractor::with_params(1, 8);
        assert_eq!(extractor.extract(&buffer), vec![c, a, b]);
    }

    #[test]
    fn test_top_k_truncates() {
        let colors: Vec<Rgb> = (0..20u8).map(|v| Rgb::new(v, v, v)).collect();
        let buffer = buffer_from(&colors);

        let result = PaletteExtractor::with_params(1, 8).analyze(&buffer);
        assert_eq!(result.colors.len(), 8);
        assert_eq!(result.distinct_colors, 20);
        assert_eq!(result.colors[0].color, Rgb::new(0, 0, 0));

        assert!(PaletteExtractor::with_params(1, 0).extract(&buffer).is_empty());
    }

    #[test]
    fn test_alpha_is_ignored() {
        let data = vec![9, 9, 9, 0, 9, 9, 9, 255];
        let buffer = PixelBuffer::new(2, 1, data).unwrap();
        let result = PaletteExtractor::with_params(1, 8).analyze(&buffer);
        assert_eq!(result.colors, vec![ColorFrequency { color: Rgb::new(9, 9, 9), count: 2 }]);
    }
}
