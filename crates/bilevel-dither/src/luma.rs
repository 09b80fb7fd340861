//! RGB to luma conversion.

/// Convert an sRGB triple to 8-bit luma using ITU-R BT.601 weights.
///
/// `L = (299 R + 587 G + 114 B) / 1000`, rounded to nearest. The weights
/// sum to 1000, so pure black and pure white map to 0 and 255 exactly.
#[inline]
pub fn luma_from_rgb(r: u8, g: u8, b: u8) -> u8 {
    let sum = r as u32 * 299 + g as u32 * 587 + b as u32 * 114;
    ((sum + 500) / 1000) as u8
}
