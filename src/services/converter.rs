use std::io::Read;
use std::path::Path;

use bilevel_dither::{Binarizer, BilevelImage, GrayImage};

use crate::error::ConvertError;
use crate::models::{ArrayStyle, ConvertOptions, OutputFormat};
use crate::rendering::{c_array, g4, png_loader};
use fax::tiff;

/// Result of converting one image
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
    /// Encoded bytes embedded in the array
    pub bytes: Vec<u8>,
    /// Rendered C array literal, newline terminated
    pub text: String,
}

/// Converts PNG images to C array literals: decode → 1-bit → encode → render
pub struct Converter {
    options: ConvertOptions,
    binarizer: Binarizer,
}

impl Converter {
    /// Create a converter, rejecting options that could not produce valid C
    pub fn new(options: ConvertOptions) -> Result<Self, ConvertError> {
        options.style.validate()?;
        let binarizer = Binarizer::new()
            .mode(options.dither)
            .threshold(options.threshold);
        Ok(Self { options, binarizer })
    }

    /// Convert the PNG file at `path`
    pub fn convert_path(&self, path: impl AsRef<Path>) -> Result<Conversion, ConvertError> {
        let gray = png_loader::load_gray(path)?;
        self.convert_gray(&gray)
    }

    /// Convert PNG data read from `reader`
    pub fn convert_reader<R: Read>(&self, reader: R) -> Result<Conversion, ConvertError> {
        let gray = png_loader::decode_gray(reader)?;
        self.convert_gray(&gray)
    }

    /// Convert an already decoded grayscale image
    pub fn convert_gray(&self, gray: &GrayImage) -> Result<Conversion, ConvertError> {
        let bits = self.binarizer.binarize(gray);
        tracing::debug!(
            mode = ?self.options.dither,
            black = bits.black_count(),
            total = bits.width() * bits.height(),
            "Quantized to 1-bit"
        );

        let bytes = self.encode(&bits)?;

        let style = if self.options.actual_size_comment {
            ArrayStyle {
                comment: ArrayStyle::size_comment(
                    bits.width(),
                    bits.height(),
                    self.options.format,
                ),
                ..self.options.style.clone()
            }
        } else {
            self.options.style.clone()
        };
        let text = c_array::render(&bytes, &style);

        tracing::info!(
            width = bits.width(),
            height = bits.height(),
            format = %self.options.format,
            bytes = bytes.len(),
            "Converted image"
        );

        Ok(Conversion {
            width: bits.width(),
            height: bits.height(),
            bytes,
            text,
        })
    }

    /// Encode the bitmap in the configured output format
    fn encode(&self, bits: &BilevelImage) -> Result<Vec<u8>, ConvertError> {
        if self.options.format == OutputFormat::Packed {
            return Ok(bits.pack_msb_white());
        }

        let strip = g4::encode(bits)?;
        if self.options.verify {
            g4::verify(&strip, bits)?;
        }

        Ok(match self.options.format {
            OutputFormat::Tiff => tiff::wrap(&strip, bits.width() as u32, bits.height() as u32),
            _ => strip,
        })
    }
}
