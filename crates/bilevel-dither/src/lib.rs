//! bilevel-dither: grayscale to 1-bit conversion for e-paper bitmaps
//!
//! Firmware for monochrome e-paper panels wants exactly one bit per pixel.
//! This crate takes decoded 8-bit luma samples and reduces them to black
//! and white, either by error diffusion or by a plain threshold.
//!
//! # Quick Start
//!
//! ```
//! use bilevel_dither::{Binarizer, DitherMode, GrayImage};
//!
//! let gray = GrayImage::new(2, 2, vec![0, 255, 255, 0]).unwrap();
//! let bits = Binarizer::new().mode(DitherMode::Threshold).binarize(&gray);
//!
//! assert!(bits.is_black(0, 0));
//! assert!(!bits.is_black(1, 0));
//! ```
//!
//! # Types
//!
//! - [`GrayImage`]: one luma byte per pixel, row-major
//! - [`BilevelImage`]: one bit per pixel, `true` meaning black
//!
//! Color input is reduced to luma with [`luma_from_rgb`] (ITU-R BT.601
//! weights) before quantization.

mod dither;
mod error;
mod image;
mod luma;

pub use dither::{Binarizer, DitherMode, DEFAULT_THRESHOLD};
pub use error::BilevelError;
pub use image::{BilevelImage, GrayImage};
pub use luma::luma_from_rgb;
