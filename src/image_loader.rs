//! Image loading for palette extraction
//!
//! This module provides a single entry point for turning an image file into a
//! [`PixelBuffer`] ready for extraction.
//!
//! ## Supported Formats
//!
//! Via the `image` crate: JPEG, PNG, GIF (first frame), WebP, TIFF, BMP
//!
//! ## Design
//!
//! Every image is converted to RGBA8. Images larger than the configured maximum
//! dimension are downscaled first, preserving aspect ratio, so extraction cost
//! stays bounded regardless of the source resolution.

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};

use crate::error::{Result, SwatchError};
use crate::extraction::PixelBuffer;

/// Decoders enabled for this crate; `image` knows more formats than these
pub const SUPPORTED_FORMATS: [ImageFormat; 6] = [
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Gif,
    ImageFormat::WebP,
    ImageFormat::Tiff,
    ImageFormat::Bmp,
];

/// Detect a supported format from the file extension
pub fn detect_format(path: &Path) -> Option<ImageFormat> {
    ImageFormat::from_path(path)
        .ok()
        .filter(|format| SUPPORTED_FORMATS.contains(format))
}

/// Load an image from disk as an RGBA pixel buffer
///
/// The image is downscaled so that neither side exceeds `max_dimension`.
/// A `max_dimension` of zero disables downscaling.
///
/// # Errors
///
/// Returns `SwatchError::ImageLoadError` if:
/// - The extension is not a supported format
/// - The file cannot be opened
/// - Decoding fails
///
/// # Example
///
/// ```rust,no_run
/// use swatchbook::image_loader::load_pixels;
/// use swatchbook::PaletteExtractor;
/// use std::path::Path;
///
/// let pixels = load_pixels(Path::new("photo.jpg"), 500)?;
/// let palette = PaletteExtractor::new().extract(&pixels);
/// println!("{} colors", palette.len());
/// # Ok::<(), swatchbook::SwatchError>(())
/// ```
pub fn load_pixels(path: &Path, max_dimension: u32) -> Result<PixelBuffer> {
    let format = detect_format(path).ok_or_else(|| SwatchError::ImageLoadError {
        message: format!("Unknown image format for file: {}", path.display()),
        source: None,
    })?;

    let mut reader = ImageReader::open(path).map_err(|e| {
        SwatchError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;
    reader.set_format(format);

    let img = reader.decode().map_err(|e| {
        SwatchError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    log::debug!(
        "decoded {} as {:?}, {}x{}",
        path.display(),
        format,
        img.width(),
        img.height()
    );

    pixels_from_rgba(downscale(img, max_dimension).to_rgba8())
}

/// Target size keeping aspect ratio with the longer side at most `max_dimension`
///
/// Fractional sizes are truncated; a side never shrinks below one pixel.
pub fn fit_dimensions(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    if max_dimension == 0 {
        return (width, height);
    }

    let scale = |side: u32, long: u32| {
        let scaled = u64::from(side) * u64::from(max_dimension) / u64::from(long);
        (scaled as u32).max(1)
    };

    if width > height && width > max_dimension {
        (max_dimension, scale(height, width))
    } else if height > max_dimension {
        (scale(width, height), max_dimension)
    } else {
        (width, height)
    }
}

fn downscale(img: DynamicImage, max_dimension: u32) -> DynamicImage {
    let (width, height) = fit_dimensions(img.width(), img.height(), max_dimension);
    if (width, height) == (img.width(), img.height()) {
        return img;
    }

    log::debug!(
        "downscaling {}x{} to {width}x{height}",
        img.width(),
        img.height()
    );
    img.resize_exact(width, height, FilterType::Triangle)
}

/// Wrap a decoded RGBA image as a pixel buffer
pub fn pixels_from_rgba(img: RgbaImage) -> Result<PixelBuffer> {
    let (width, height) = img.dimensions();
    PixelBuffer::new(width, height, img.into_raw())
}

/// Get list of all supported file extensions
pub fn supported_extensions() -> Vec<&'static str> {
    SUPPORTED_FORMATS
        .iter()
        .flat_map(|format| format.extensions_str().iter().copied())
        .collect()
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    ImageFormat::from_extension(ext).is_some_and(|format| SUPPORTED_FORMATS.contains(&format))
}
