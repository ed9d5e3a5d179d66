//! WCAG relative luminance and contrast scoring
//!
//! Contrast ratios follow WCAG 2.x: `(L1 + 0.05) / (L2 + 0.05)` where `L1` is
//! the lighter of the two relative luminances. The result lies in `[1, 21]`.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::constants::{brightness, wcag};

/// Contrast ratio between two colors with WCAG pass flags for normal text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    /// Ratio in `[1, 21]`
    pub ratio: f64,
    /// Ratio is at least 4.5:1
    #[serde(rename = "meetsAA")]
    pub meets_aa: bool,
    /// Ratio is at least 7:1
    #[serde(rename = "meetsAAA")]
    pub meets_aaa: bool,
}

impl ContrastResult {
    /// Build a result from a ratio, deriving the pass flags
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            meets_aa: ratio >= wcag::AA_NORMAL,
            meets_aaa: ratio >= wcag::AAA_NORMAL,
        }
    }
}

/// sRGB channel to linear light, using the WCAG 2.x transfer function
#[inline]
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= wcag::LINEAR_THRESHOLD {
        c / wcag::LINEAR_DIVISOR
    } else {
        ((c + wcag::GAMMA_OFFSET) / (1.0 + wcag::GAMMA_OFFSET)).powf(wcag::GAMMA_EXPONENT)
    }
}

/// Relative luminance in `[0, 1]`
pub fn relative_luminance(color: Rgb) -> f64 {
    color
        .channels()
        .iter()
        .zip(wcag::LUMINANCE_WEIGHTS)
        .map(|(&channel, weight)| weight * linearize(channel))
        .sum()
}

/// Contrast ratio between two colors. Symmetric in its arguments.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + wcag::CONTRAST_FLARE) / (darker + wcag::CONTRAST_FLARE)
}

/// Contrast ratio with AA and AAA flags
pub fn check_contrast(foreground: Rgb, background: Rgb) -> ContrastResult {
    ContrastResult::from_ratio(contrast_ratio(foreground, background))
}

/// Black or white, whichever reads better on `background`.
///
/// Uses YIQ perceived brightness, `(299R + 587G + 114B) / 1000`: black text
/// above 128, white text otherwise.
pub fn readable_text_color(background: Rgb) -> Rgb {
    let weighted: u32 = background
        .channels()
        .iter()
        .zip(brightness::YIQ_WEIGHTS)
        .map(|(&channel, weight)| u32::from(channel) * weight)
        .sum();
    let value = f64::from(weighted) / 1000.0;

    if value > brightness::DARK_TEXT_ABOVE {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_luminance_extremes() {
        assert!(relative_luminance(Rgb::BLACK).abs() < 1e-12);
        assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_relative_luminance_mid_gray() {
        // sRGB 119 is close to 18% reflectance
        let l = relative_luminance(Rgb::new(119, 119, 119));
        assert!((l - 0.184).abs() < 0.001, "got {l}");
    }

    #[test]
    fn test_linear_segment() {
        // 10 / 255 = 0.0392 sits just under the threshold
        assert!((linearize(10) - (10.0 / 255.0) / 12.92).abs() < 1e-12);
    }

    #[test]
    fn test_contrast_black_white() {
        let ratio = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
        assert!((ratio - 21.0).abs() < 0.01, "got {ratio}");
    }

    #[test]
    fn test_contrast_same_color() {
        for color in [Rgb::BLACK, Rgb::WHITE, Rgb::new(59, 130, 246)] {
            assert_eq!(contrast_ratio(color, color), 1.0);
        }
    }

    #[test]
    fn test_contrast_is_symmetric() {
        let a = Rgb::new(59, 130, 246);
        let b = Rgb::new(255, 215, 0);
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    #[test]
    fn test_pass_flags() {
        let result = check_contrast(Rgb::BLACK, Rgb::WHITE);
        assert!(result.meets_aa && result.meets_aaa);

        // #777777 on white is about 4.48:1
        let result = check_contrast(Rgb::new(0x77, 0x77, 0x77), Rgb::WHITE);
        assert!(!result.meets_aa);
        assert!(!result.meets_aaa);

        let result = ContrastResult::from_ratio(4.5);
        assert!(result.meets_aa);
        assert!(!result.meets_aaa);

        assert!(ContrastResult::from_ratio(7.0).meets_aaa);
    }

    #[test]
    fn test_contrast_result_serialization() {
        let json = serde_json::to_string(&ContrastResult::from_ratio(21.0)).unwrap();
        assert_eq!(json, r#"{"ratio":21.0,"meetsAA":true,"meetsAAA":true}"#);
    }

    #[test]
    fn test_readable_text_color() {
        assert_eq!(readable_text_color(Rgb::WHITE), Rgb::BLACK);
        assert_eq!(readable_text_color(Rgb::BLACK), Rgb::WHITE);
        assert_eq!(readable_text_color(Rgb::new(255, 215, 0)), Rgb::BLACK);
        assert_eq!(readable_text_color(Rgb::new(59, 130, 246)), Rgb::WHITE);
        // Exactly 128 is not above the threshold
        assert_eq!(readable_text_color(Rgb::new(128, 128, 128)), Rgb::WHITE);
    }
}
