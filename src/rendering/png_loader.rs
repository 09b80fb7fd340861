use crate::error::ConvertError;
use bilevel_dither::{luma_from_rgb, GrayImage};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load a PNG file and reduce it to 8-bit luma.
pub fn load_gray(path: impl AsRef<Path>) -> Result<GrayImage, ConvertError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    tracing::debug!(path = %path.display(), "Opened PNG");
    decode_gray(BufReader::new(file))
}

/// Decode PNG data from any reader and reduce it to 8-bit luma.
///
/// Palette, low bit depth and 16-bit images are normalized to 8-bit
/// samples first. Color is converted with BT.601 weights. The alpha
/// channel is dropped, so a fully transparent black pixel stays black.
pub fn decode_gray<R: Read>(reader: R) -> Result<GrayImage, ConvertError> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let data = &buf[..info.buffer_size()];

    if info.width == 0 || info.height == 0 {
        return Err(ConvertError::EmptyImage {
            width: info.width,
            height: info.height,
        });
    }

    let luma: Vec<u8> = match info.color_type {
        png::ColorType::Grayscale => data.to_vec(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .map(|px| px[0])
            .collect(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .map(|px| luma_from_rgb(px[0], px[1], px[2]))
            .collect(),
        png::ColorType::Rgba => data
            .chunks_exact(4)
            .map(|px| luma_from_rgb(px[0], px[1], px[2]))
            .collect(),
        other => return Err(ConvertError::UnsupportedColor(other)),
    };

    tracing::debug!(
        width = info.width,
        height = info.height,
        color_type = ?info.color_type,
        "Decoded PNG"
    );

    Ok(GrayImage::new(
        info.width as usize,
        info.height as usize,
        luma,
    )?)
}
