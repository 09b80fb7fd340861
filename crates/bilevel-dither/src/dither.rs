//! 1-bit quantization: Floyd-Steinberg error diffusion or plain threshold.
//!
//! Error diffusion keeps the average brightness of photographic content,
//! thresholding keeps line art and text free of noise. Both produce a
//! [`BilevelImage`] where a pixel is white when its (error adjusted) luma
//! reaches the threshold.

use crate::image::{BilevelImage, GrayImage};

/// Default black/white decision point on the 0-255 luma scale.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Quantization strategy for [`Binarizer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DitherMode {
    /// Floyd-Steinberg error diffusion in raster order (default)
    #[default]
    FloydSteinberg,
    /// Fixed threshold, no error diffusion
    Threshold,
}

/// Converts grayscale images to bilevel images.
///
/// Configuration methods consume and return `self`; [`binarize()`](Self::binarize)
/// takes `&self` so one binarizer can process any number of images.
///
/// # Example
///
/// ```
/// use bilevel_dither::{Binarizer, DitherMode, GrayImage};
///
/// let gray = GrayImage::new(4, 1, vec![0, 100, 160, 255]).unwrap();
/// let bits = Binarizer::new()
///     .mode(DitherMode::Threshold)
///     .threshold(150)
///     .binarize(&gray);
///
/// assert_eq!(bits.black_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Binarizer {
    mode: DitherMode,
    threshold: u8,
}

impl Default for Binarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Binarizer {
    /// Create a binarizer using Floyd-Steinberg at threshold 128.
    pub fn new() -> Self {
        Self {
            mode: DitherMode::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Set the quantization strategy.
    #[inline]
    pub fn mode(mut self, mode: DitherMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the luma value at and above which a pixel becomes white.
    #[inline]
    pub fn threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Quantize `image` to one bit per pixel.
    pub fn binarize(&self, image: &GrayImage) -> BilevelImage {
        let pixels = match self.mode {
            DitherMode::FloydSteinberg => floyd_steinberg(image, self.threshold),
            DitherMode::Threshold => image
                .pixels()
                .iter()
                .map(|&luma| luma < self.threshold)
                .collect(),
        };

        BilevelImage::from_validated(image.width(), image.height(), pixels)
    }
}

/// Floyd-Steinberg error diffusion, returning `true` for black pixels.
///
/// Error accumulates in an `i32` working buffer so values may run outside
/// 0-255 while diffusing. The kernel:
///
/// ```text
///        X   7
///    3   5   1
/// ```
fn floyd_steinberg(image: &GrayImage, threshold: u8) -> Vec<bool> {
    let w = image.width();
    let h = image.height();
    let threshold = threshold as i32;

    let mut buffer: Vec<i32> = image.pixels().iter().map(|&v| v as i32).collect();
    let mut out = vec![false; w * h];

    for y in 0..h {
        for x in 0..w {
            let idx = y * w + x;
            let old_val = buffer[idx];
            let white = old_val >= threshold;
            let new_val = if white { 255 } else { 0 };
            out[idx] = !white;

            let error = old_val - new_val;
            if error == 0 {
                continue;
            }

            if x + 1 < w {
                buffer[idx + 1] += error * 7 / 16;
            }
            if y + 1 < h {
                if x > 0 {
                    buffer[idx + w - 1] += error * 3 / 16;
                }
                buffer[idx + w] += error * 5 / 16;
                if x + 1 < w {
                    buffer[idx + w + 1] += error / 16;
                }
            }
        }
    }

    out
}
