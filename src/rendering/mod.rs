//! Image decoding, 1-bit encoding and C array rendering.

pub mod c_array;
pub mod g4;
pub mod png_loader;
