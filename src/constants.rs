//! Reference values and default parameters for color computations
//!
//! This module contains compile-time constants: WCAG coefficients, the
//! color-vision-deficiency matrices, naming thresholds and the read-only
//! lookup tables (named colors, preset palettes) shared by every component.

/// WCAG 2.x relative luminance and contrast reference values
pub mod wcag {
    /// Normalized channel value at or below which the sRGB curve is linear.
    /// WCAG 2.0 publishes 0.03928; IEC 61966-2-1 uses 0.04045. The two agree
    /// for every 8-bit channel value.
    pub const LINEAR_THRESHOLD: f64 = 0.03928;

    /// Slope of the linear segment
    pub const LINEAR_DIVISOR: f64 = 12.92;

    /// Offset and exponent of the gamma segment
    pub const GAMMA_OFFSET: f64 = 0.055;
    pub const GAMMA_EXPONENT: f64 = 2.4;

    /// Luminance weights for linear R, G, B (Rec. 709 primaries)
    pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

    /// Flare term added to both luminances in the contrast ratio
    pub const CONTRAST_FLARE: f64 = 0.05;

    /// Minimum contrast for normal text at level AA
    pub const AA_NORMAL: f64 = 4.5;

    /// Minimum contrast for normal text at level AAA
    pub const AAA_NORMAL: f64 = 7.0;

    /// Contrast bounds: identical colors and black on white
    pub const MIN_CONTRAST: f64 = 1.0;
    pub const MAX_CONTRAST: f64 = 21.0;
}

/// YIQ brightness used to pick black or white text over a background
pub mod brightness {
    /// Channel weights, scaled by 1000
    pub const YIQ_WEIGHTS: [u32; 3] = [299, 587, 114];

    /// Brightness above which dark text is preferred
    pub const DARK_TEXT_ABOVE: f64 = 128.0;
}

/// Channel-mixing matrices for color-vision-deficiency simulation.
///
/// Rows produce R', G', B' from (R, G, B).
pub mod vision {
    /// Red-blind
    pub const PROTANOPIA: [[f64; 3]; 3] = [
        [0.567, 0.433, 0.0],
        [0.558, 0.442, 0.0],
        [0.0, 0.242, 0.758],
    ];

    /// Green-blind
    pub const DEUTERANOPIA: [[f64; 3]; 3] = [
        [0.625, 0.375, 0.0],
        [0.7, 0.3, 0.0],
        [0.0, 0.3, 0.7],
    ];

    /// Blue-blind
    pub const TRITANOPIA: [[f64; 3]; 3] = [
        [0.95, 0.05, 0.0],
        [0.0, 0.433, 0.567],
        [0.0, 0.475, 0.525],
    ];
}

/// Thresholds of the heuristic color namer, in rounded HSL units
pub mod naming {
    /// Lightness above which a color is "Very Light"
    pub const VERY_LIGHT_ABOVE: u8 = 90;
    /// Lightness above which a color is "Light"
    pub const LIGHT_ABOVE: u8 = 70;
    /// Lightness below which a color is "Very Dark"
    pub const VERY_DARK_BELOW: u8 = 20;
    /// Lightness below which a color is "Dark"
    pub const DARK_BELOW: u8 = 40;

    /// Saturation below which the hue is dropped and the color is a gray
    pub const GRAY_BELOW: u8 = 10;
    /// Saturation below which the hue is qualified as "Grayish"
    pub const GRAYISH_BELOW: u8 = 30;
}

/// Palette generation defaults
pub mod palettes {
    /// Default number of shades and tints
    pub const DEFAULT_SHADE_COUNT: usize = 5;
    pub const DEFAULT_TINT_COUNT: usize = 5;

    /// Lightness walk of the shade generator, in percent
    pub const SHADE_LIGHTNESS_MIN: f64 = 10.0;
    pub const SHADE_LIGHTNESS_MAX: f64 = 90.0;

    /// Number of shades returned by the monochromatic scheme
    pub const MONOCHROMATIC_COUNT: usize = 5;
}

/// Gradient defaults
pub mod gradient {
    /// Default number of sampled colors
    pub const DEFAULT_STEPS: usize = 5;

    /// Default CSS linear-gradient angle in degrees
    pub const DEFAULT_ANGLE_DEGREES: u16 = 90;

    /// Minimum stops and steps for a well-formed gradient
    pub const MIN_STOPS: usize = 2;
    pub const MIN_STEPS: usize = 2;
}

/// Image palette extraction defaults
pub mod extraction {
    /// Examine every n-th pixel
    pub const DEFAULT_SAMPLE_STRIDE: usize = 10;

    /// Number of dominant colors returned
    pub const DEFAULT_TOP_K: usize = 8;

    /// Longest image side after downscaling at load time
    pub const DEFAULT_MAX_DIMENSION: u32 = 500;

    /// Bytes per RGBA8 pixel
    pub const BYTES_PER_PIXEL: usize = 4;
}

/// CSS snippet parameters
pub mod css {
    /// Opacity of the generated box shadow
    pub const BOX_SHADOW_OPACITY: f64 = 0.3;

    /// Opacity of the generated text shadow
    pub const TEXT_SHADOW_OPACITY: f64 = 0.5;
}

/// Saved-item history limits, newest entries kept
pub mod history {
    pub const MAX_SAVED_COLORS: usize = 50;
    pub const MAX_SAVED_PALETTES: usize = 20;
}

/// Canonical named colors, keyed by uppercase hex
pub const NAMED_COLORS: [(&str, &str); 15] = [
    ("#FF0000", "Red"),
    ("#00FF00", "Green"),
    ("#0000FF", "Blue"),
    ("#FFFF00", "Yellow"),
    ("#FF00FF", "Magenta"),
    ("#00FFFF", "Cyan"),
    ("#FFFFFF", "White"),
    ("#000000", "Black"),
    ("#808080", "Gray"),
    ("#FFA500", "Orange"),
    ("#800080", "Purple"),
    ("#FFC0CB", "Pink"),
    ("#A52A2A", "Brown"),
    ("#FFD700", "Gold"),
    ("#C0C0C0", "Silver"),
];

/// Curated palettes offered as starting points
pub const POPULAR_PALETTES: [(&str, [&str; 5]); 8] = [
    ("Sunset", ["#FF6B6B", "#FFA06B", "#FFD06B", "#FFE66D", "#FFF06B"]),
    ("Ocean", ["#1A535C", "#4ECDC4", "#95E1D3", "#A8DADC", "#F1FAEE"]),
    ("Forest", ["#2D4A3E", "#5C8A70", "#8BB89F", "#B8D4C8", "#E5F2ED"]),
    ("Royal", ["#4A148C", "#6A1B9A", "#8E24AA", "#AB47BC", "#CE93D8"]),
    ("Candy", ["#FF99C8", "#FCF6BD", "#D0F4DE", "#A9DEF9", "#E4C1F9"]),
    ("Earth", ["#8B4513", "#A0522D", "#CD853F", "#DEB887", "#F5DEB3"]),
    ("Neon", ["#FF006E", "#FB5607", "#FFBE0B", "#8338EC", "#3A86FF"]),
    ("Pastel", ["#FFB3BA", "#FFDFBA", "#FFFFBA", "#BAFFC9", "#BAE1FF"]),
];
