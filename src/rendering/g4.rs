//! CCITT Group 4 (ITU-T T.6) coding of bilevel images.
//!
//! Coding is delegated to the `fax` crate. Each image row becomes one
//! coded line referencing the previous row; the strip ends with EOFB and
//! is padded to a byte boundary, MSB first, which is the bit order the
//! firmware's raw G4 decoder expects.

use std::convert::Infallible;

use crate::error::ConvertError;
use bilevel_dither::BilevelImage;
use fax::decoder::{pels, DecodeStatus, Group4Decoder};
use fax::encoder::Encoder;
use fax::{Color, VecWriter};

/// Widest line the G4 coder can address
pub const MAX_WIDTH: usize = u16::MAX as usize;

fn line_width(image: &BilevelImage) -> Result<u16, ConvertError> {
    u16::try_from(image.width()).map_err(|_| ConvertError::TooWide {
        width: image.width(),
        max: MAX_WIDTH,
    })
}

/// Encode `image` as a single G4 strip.
pub fn encode(image: &BilevelImage) -> Result<Vec<u8>, ConvertError> {
    let width = line_width(image)?;

    let mut encoder = Encoder::new(VecWriter::new());
    for row in image.rows() {
        let line = row
            .iter()
            .map(|&black| if black { Color::Black } else { Color::White });
        encoder
            .encode_line(line, width)
            .map_err(|e| ConvertError::Encode(format!("{e:?}")))?;
    }
    let writer = encoder
        .finish()
        .map_err(|e| ConvertError::Encode(format!("{e:?}")))?;
    let strip = writer.finish();

    tracing::debug!(
        width = image.width(),
        height = image.height(),
        bytes = strip.len(),
        "Encoded G4 strip"
    );
    Ok(strip)
}

/// Decode `strip` and check it reproduces `image` row for row.
///
/// Decoding runs until the EOFB marker, so the image height is not
/// bounded by the 16-bit line counter of the one-shot decode helper.
pub fn verify(strip: &[u8], image: &BilevelImage) -> Result<(), ConvertError> {
    let width = line_width(image)?;
    let height = image.height();

    let reader = strip.iter().map(|&byte| Ok::<u8, Infallible>(byte));
    let mut decoder = match Group4Decoder::new(reader, width) {
        Ok(decoder) => decoder,
        Err(never) => match never {},
    };

    let mut decoded = 0usize;
    while decoded < height {
        match decoder.advance() {
            Ok(DecodeStatus::Incomplete) => {}
            Ok(DecodeStatus::End) | Err(_) => break,
        }
        let same = pels(decoder.transition(), width)
            .zip(image.row(decoded))
            .all(|(color, &black)| matches!(color, Color::Black) == black);
        if !same {
            return Err(ConvertError::VerifyMismatch { row: decoded });
        }
        decoded += 1;
    }

    if decoded < height {
        return Err(ConvertError::VerifyTruncated {
            decoded,
            expected: height,
        });
    }
    tracing::debug!(rows = decoded, "G4 strip verified");
    Ok(())
}
