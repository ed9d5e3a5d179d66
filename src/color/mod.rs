//! Color model core
//!
//! This module holds the canonical [`Rgb`] value, its derived views and the
//! conversions between them, plus the heuristic color namer.

pub mod conversion;
pub mod model;
pub mod naming;

pub use conversion::{
    delta_e, hex_to_rgb, hsl_to_hex, hsl_to_rgb, hsv_to_rgb, rgb_to_cmyk, rgb_to_hex,
    rgb_to_hsl, rgb_to_hsl_exact, rgb_to_hsv, rgb_to_hsv_exact, rgb_to_lab,
};
pub use model::{Alpha, Cmyk, Hsl, Hsv, Rgb};
pub use naming::{closest_named_color, color_name, ColorNamer};
