//! Grayscale input and bilevel output image types.
//!
//! Both types store pixels in row-major order and validate that the buffer
//! length matches the dimensions on construction, so every accessor can
//! index without further checks.

use crate::error::BilevelError;

fn check_dimensions(width: usize, height: usize, len: usize) -> Result<(), BilevelError> {
    if width == 0 || height == 0 {
        return Err(BilevelError::EmptyImage);
    }
    let expected = width * height;
    if len != expected {
        return Err(BilevelError::LengthMismatch {
            expected,
            actual: len,
        });
    }
    Ok(())
}

/// An 8-bit grayscale image, one luma sample per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct GrayImage {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl GrayImage {
    /// Create a grayscale image from row-major luma samples.
    ///
    /// Returns an error if either dimension is zero or if
    /// `pixels.len() != width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self, BilevelError> {
        check_dimensions(width, height, pixels.len())?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the luma samples as a slice.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// A 1-bit image where each pixel is either black or white.
///
/// Pixels are stored as `bool` with `true` meaning black. This matches the
/// way fax codings think about a scanline (runs of white and black) and
/// keeps bit-packing decisions at the edges where the output format is
/// known.
///
/// # Example
///
/// ```
/// use bilevel_dither::BilevelImage;
///
/// let image = BilevelImage::new(3, 1, vec![true, false, false]).unwrap();
///
/// assert_eq!(image.black_count(), 1);
/// // Bit set means white, rows are padded to whole bytes
/// assert_eq!(image.pack_msb_white(), vec![0b0111_1111]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BilevelImage {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl BilevelImage {
    /// Create a bilevel image from row-major pixels (`true` = black).
    pub fn new(width: usize, height: usize, pixels: Vec<bool>) -> Result<Self, BilevelError> {
        check_dimensions(width, height, pixels.len())?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Dimensions already checked by a [`GrayImage`] of the same size.
    pub(crate) fn from_validated(width: usize, height: usize, pixels: Vec<bool>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns whether the pixel at `(x, y)` is black.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the image.
    #[inline]
    pub fn is_black(&self, x: usize, y: usize) -> bool {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.pixels[y * self.width + x]
    }

    /// Returns one row of pixels.
    #[inline]
    pub fn row(&self, y: usize) -> &[bool] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.pixels.chunks_exact(self.width)
    }

    /// Returns the number of black pixels.
    pub fn black_count(&self) -> usize {
        self.pixels.iter().filter(|&&black| black).count()
    }

    /// Pack pixels one bit each, MSB first, with a set bit meaning white.
    ///
    /// Each row starts on a byte boundary; unused low bits of the final
    /// byte in a row are set (white), which is what e-paper controllers
    /// expect for the margin beyond the visible width.
    pub fn pack_msb_white(&self) -> Vec<u8> {
        let stride = self.width.div_ceil(8);
        let mut packed = vec![0xFFu8; stride * self.height];
        for (y, row) in self.rows().enumerate() {
            for (x, &black) in row.iter().enumerate() {
                if black {
                    packed[y * stride + x / 8] &= !(0x80 >> (x % 8));
                }
            }
        }
        packed
    }
}
