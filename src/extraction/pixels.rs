//! Read-only RGBA pixel buffers

use crate::color::Rgb;
use crate::constants::extraction::BYTES_PER_PIXEL;
use crate::{Result, SwatchError};

/// Decoded RGBA8 image, row-major, four bytes per pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap a raw RGBA buffer
    ///
    /// # Errors
    ///
    /// Returns `SwatchError::PixelBufferSize` if `data` is not exactly
    /// `width * height * 4` bytes long
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if byte_len(width, height) != Some(data.len()) {
            return Err(SwatchError::PixelBufferSize {
                len: data.len(),
                width,
                height,
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Buffer of a single color, fully opaque
    ///
    /// # Errors
    ///
    /// Returns `SwatchError::PixelBufferSize` if `width * height * 4` does
    /// not fit in memory addressing
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self> {
        let len = byte_len(width, height).ok_or(SwatchError::PixelBufferSize {
            len: 0,
            width,
            height,
        })?;

        let data = [color.r, color.g, color.b, u8::MAX]
            .into_iter()
            .cycle()
            .take(len)
            .collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / BYTES_PER_PIXEL
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw RGBA bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Color of the pixel at linear index `index`, alpha ignored
    pub fn color_at_index(&self, index: usize) -> Option<Rgb> {
        let start = index.checked_mul(BYTES_PER_PIXEL)?;
        let pixel = self.data.get(start..start.checked_add(BYTES_PER_PIXEL)?)?;
        Some(Rgb::new(pixel[0], pixel[1], pixel[2]))
    }

    /// Read exactly one pixel
    ///
    /// # Errors
    ///
    /// Returns `SwatchError::PixelOutOfBounds` if `(x, y)` is outside the
    /// image. Use [`clamp_point`](Self::clamp_point) to clamp pointer
    /// coordinates first.
    pub fn pick_color(&self, x: u32, y: u32) -> Result<Rgb> {
        if x >= self.width || y >= self.height {
            return Err(SwatchError::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        let index = y as usize * self.width as usize + x as usize;
        self.color_at_index(index).ok_or(SwatchError::PixelOutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    /// Clamp signed pointer coordinates onto the image. Returns `None` for an
    /// empty image.
    pub fn clamp_point(&self, x: i64, y: i64) -> Option<(u32, u32)> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let clamp = |v: i64, len: u32| v.clamp(0, i64::from(len) - 1) as u32;
        Some((clamp(x, self.width), clamp(y, self.height)))
    }
}

/// RGBA byte length of a `width` x `height` image, `None` on overflow
fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
}
