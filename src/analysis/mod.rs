//! Perceptual analysis
//!
//! WCAG luminance and contrast scoring, readable text color selection and
//! color-vision-deficiency simulation.

pub mod contrast;
pub mod vision;

pub use contrast::{
    check_contrast, contrast_ratio, readable_text_color, relative_luminance, ContrastResult,
};
pub use vision::{simulate_color_blindness, Deficiency};
