use crate::error::ConvertError;
use bilevel_dither::{DitherMode, DEFAULT_THRESHOLD};
use std::fmt;

/// Comment emitted when no other comment is requested
pub const DEFAULT_COMMENT: &str = "Example 128x250 bitmap data in G4 compressed TIFF format";

/// Array identifier emitted when no other name is requested
pub const DEFAULT_ARRAY_NAME: &str = "example_bitmap";

/// Bytes rendered per line of the array literal
pub const DEFAULT_BYTES_PER_LINE: usize = 8;

/// Byte layout embedded in the array
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Complete TIFF file with a single G4 compressed strip
    #[default]
    Tiff,
    /// Bare G4 strip, as consumed by raw fax decoders
    G4,
    /// Uncompressed 1bpp rows, MSB first, bit set = white
    Packed,
}

impl OutputFormat {
    /// Human readable description used in generated comments
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Tiff => "G4 compressed TIFF format",
            OutputFormat::G4 => "raw G4 format",
            OutputFormat::Packed => "uncompressed 1bpp format",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Tiff => write!(f, "tiff"),
            OutputFormat::G4 => write!(f, "g4"),
            OutputFormat::Packed => write!(f, "packed"),
        }
    }
}

/// How the C array literal is laid out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayStyle {
    /// Text of the leading `//` comment line (without the `// ` prefix)
    pub comment: String,
    /// Identifier of the `const uint8_t` array
    pub name: String,
    /// Number of byte tokens per data line (at least 1)
    pub bytes_per_line: usize,
}

impl Default for ArrayStyle {
    fn default() -> Self {
        Self {
            comment: DEFAULT_COMMENT.to_string(),
            name: DEFAULT_ARRAY_NAME.to_string(),
            bytes_per_line: DEFAULT_BYTES_PER_LINE,
        }
    }
}

impl ArrayStyle {
    /// Comment describing the real image size and byte layout
    pub fn size_comment(width: usize, height: usize, format: OutputFormat) -> String {
        format!(
            "Example {width}x{height} bitmap data in {}",
            format.description()
        )
    }

    /// Check that `name` is usable as a C identifier
    pub fn validate(&self) -> Result<(), ConvertError> {
        let mut chars = self.name.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        if valid_start && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            Ok(())
        } else {
            Err(ConvertError::InvalidName(self.name.clone()))
        }
    }
}

/// Options for a single PNG conversion.
///
/// `Default` reproduces the firmware tooling's fixed behavior: dithered,
/// TIFF/G4, 8 bytes per line, `example_bitmap` with the stock comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub format: OutputFormat,
    pub dither: DitherMode,
    pub threshold: u8,
    /// Decode the G4 strip again and compare it to the bitmap
    pub verify: bool,
    /// Replace the comment with one naming the actual image size
    pub actual_size_comment: bool,
    pub style: ArrayStyle,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            dither: DitherMode::default(),
            threshold: DEFAULT_THRESHOLD,
            verify: false,
            actual_size_comment: false,
            style: ArrayStyle::default(),
        }
    }
}
