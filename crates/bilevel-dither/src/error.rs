//! Error type for image construction.

use std::fmt;

/// Error returned when pixel data does not fit the declared dimensions.
#[derive(Debug, Clone, PartialEq)]
pub enum BilevelError {
    /// Width or height is zero
    EmptyImage,
    /// Pixel buffer length does not equal `width * height`
    LengthMismatch {
        /// Number of pixels implied by the dimensions
        expected: usize,
        /// Number of pixels actually provided
        actual: usize,
    },
}

impl fmt::Display for BilevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BilevelError::EmptyImage => {
                write!(f, "image has zero width or height")
            }
            BilevelError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel buffer length mismatch: expected {} pixels, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for BilevelError {}
