//! Error types for the swatchbook library
//!
//! Color conversions never fail: malformed input is clamped or resolved to a
//! documented default. The variants below cover the fallible edges only:
//! strict parsing, validated constructors, image files and configuration.

use thiserror::Error;

/// Result type alias for swatchbook operations
pub type Result<T> = std::result::Result<T, SwatchError>;

/// Error types for the fallible edges of the engine
#[derive(Error, Debug)]
pub enum SwatchError {
    /// Hex string could not be parsed by the strict parser
    #[error("Invalid hex color '{input}': {reason}")]
    InvalidHex { input: String, reason: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Pixel buffer length does not describe a `width` x `height` RGBA image
    #[error("Pixel buffer of {len} bytes does not match {width}x{height} RGBA")]
    PixelBufferSize { len: usize, width: u32, height: u32 },

    /// Requested pixel lies outside the buffer
    #[error("Pixel ({x}, {y}) is outside the {width}x{height} image")]
    PixelOutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration file could not be read, written or parsed
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Export record could not be serialized
    #[error("Export error: {message}")]
    ExportError {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },
}

impl SwatchError {
    /// Create an invalid hex error
    pub fn invalid_hex(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an export error from a serialization failure
    pub fn export(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ExportError {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Check if this error indicates a condition the caller can fix by retrying
    /// with corrected input
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SwatchError::InvalidHex { .. }
                | SwatchError::InvalidParameter { .. }
                | SwatchError::PixelOutOfBounds { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            SwatchError::InvalidHex { input, .. } => {
                format!("'{input}' is not a valid color. Use six hex digits such as #3B82F6.")
            }
            SwatchError::ImageLoadError { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            SwatchError::PixelOutOfBounds { .. } => {
                "The selected point is outside the image.".to_string()
            }
            SwatchError::ConfigError { .. } => {
                "Could not read the configuration file.".to_string()
            }
            _ => "Color operation failed. Please check the input and try again.".to_string(),
        }
    }
}
