//! Test fixtures: PNG images generated in memory.

/// Encode 8-bit grayscale pixels as a PNG
pub fn gray_png(width: u32, height: u32, pixels: &[u8]) -> Vec<u8> {
    encode(width, height, png::ColorType::Grayscale, pixels)
}

/// Encode 8-bit RGBA pixels as a PNG
pub fn rgba_png(width: u32, height: u32, pixels: &[u8]) -> Vec<u8> {
    encode(width, height, png::ColorType::Rgba, pixels)
}

/// Single black pixel
pub fn black_pixel_png() -> Vec<u8> {
    gray_png(1, 1, &[0])
}

/// Horizontal gradient, black on the left to white on the right
pub fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    let pixels: Vec<u8> = (0..height)
        .flat_map(|_| (0..width).map(move |x| (x * 255 / (width - 1).max(1)) as u8))
        .collect();
    gray_png(width, height, &pixels)
}

/// Black frame on a white page, the typical e-paper test pattern
pub fn frame_png(width: u32, height: u32) -> Vec<u8> {
    let pixels: Vec<u8> = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                let edge = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                if edge {
                    0
                } else {
                    255
                }
            })
        })
        .collect();
    gray_png(width, height, &pixels)
}

fn encode(width: u32, height: u32, color: png::ColorType, pixels: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("PNG header");
        writer.write_image_data(pixels).expect("PNG data");
    }
    out
}
