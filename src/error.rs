use bilevel_dither::BilevelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG decode error: {0}")]
    Decode(#[from] png::DecodingError),

    #[error("Unsupported PNG color type: {0:?}")]
    UnsupportedColor(png::ColorType),

    #[error("Image is empty: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Image too wide for G4 coding: {width} pixels (max {max})")]
    TooWide { width: usize, max: usize },

    #[error("G4 encode error: {0}")]
    Encode(String),

    #[error("Invalid C identifier: {0:?}")]
    InvalidName(String),

    #[error("G4 round trip differs from source at row {row}")]
    VerifyMismatch { row: usize },

    #[error("G4 round trip decoded {decoded} of {expected} rows")]
    VerifyTruncated { decoded: usize, expected: usize },

    #[error("Bitmap error: {0}")]
    Bitmap(#[from] BilevelError),
}
