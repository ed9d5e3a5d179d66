//! Image palette extraction
//!
//! This module reads decoded RGBA pixel buffers: dominant-color extraction by
//! strided sampling, and single-pixel picking.

pub mod extractor;
pub mod pixels;

pub use extractor::{extract_palette, ColorFrequency, ExtractionResult, PaletteExtractor};
pub use pixels::PixelBuffer;
