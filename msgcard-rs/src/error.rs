//! Error types for msgcard-rs.

use thiserror::Error;

/// Result type alias using CardError.
pub type CardResult<T> = Result<T, CardError>;

/// Errors that can occur while rendering or exporting a card.
#[derive(Debug, Error)]
pub enum CardError {
    /// Invalid surface dimensions (must be positive and within limits).
    #[error("Invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Failed to parse a color value.
    #[error("Failed to parse color: {0}")]
    ColorParse(String),

    /// Failed to decode an encoded card image.
    #[error("Image decode error: {0}")]
    ImageDecode(String),

    /// An uploaded image was rejected at ingestion. The message is the
    /// user-facing validation text.
    #[error("Invalid image upload: {0}")]
    ImageValidation(String),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncode(String),
}

impl From<png::EncodingError> for CardError {
    fn from(err: png::EncodingError) -> Self {
        CardError::PngEncode(err.to_string())
    }
}
