//! Rendering byte buffers as C array initializers.
//!
//! Output shape:
//!
//! ```text
//! // Example 128x250 bitmap data in G4 compressed TIFF format
//! const uint8_t example_bitmap[] = {
//!     0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00, 
//!     0x0D, 0x00
//! };
//! ```

use crate::models::ArrayStyle;

const INDENT: &str = "    ";

/// Render `bytes` as the lines of a C array literal.
///
/// Bytes are grouped `style.bytes_per_line` to a line; every data line
/// except the last keeps the `, ` separator after its final token. An empty buffer yields only the comment,
/// the declaration and the closing `};`.
pub fn render_lines(bytes: &[u8], style: &ArrayStyle) -> Vec<String> {
    let per_line = style.bytes_per_line.max(1);
    let chunk_count = bytes.len().div_ceil(per_line);

    let mut lines = Vec::with_capacity(chunk_count + 3);
    lines.push(format!("// {}", style.comment));
    lines.push(format!("const uint8_t {}[] = {{", style.name));

    for (i, chunk) in bytes.chunks(per_line).enumerate() {
        let tokens: Vec<String> = chunk.iter().map(|b| format!("0x{b:02X}")).collect();
        let separator = if i + 1 < chunk_count { ", " } else { "" };
        lines.push(format!("{INDENT}{}{separator}", tokens.join(", ")));
    }

    lines.push("};".to_string());
    lines
}

/// Render `bytes` as a complete newline-terminated C array literal.
pub fn render(bytes: &[u8], style: &ArrayStyle) -> String {
    let mut text = render_lines(bytes, style).join("\n");
    text.push('\n');
    text
}

/// Read the byte tokens back out of text produced by [`render`].
///
/// Only lines between the `{` declaration and the closing `};` are
/// considered. Returns `None` if any token is not a `0xNN` literal.
pub fn parse(text: &str) -> Option<Vec<u8>> {
    let mut lines = text.lines();
    lines.find(|line| line.trim_end().ends_with('{'))?;

    let mut bytes = Vec::new();
    for line in lines {
        let line = line.trim();
        if line == "};" {
            return Some(bytes);
        }
        for token in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let hex = token.strip_prefix("0x")?;
            if hex.len() != 2 {
                return None;
            }
            bytes.push(u8::from_str_radix(hex, 16).ok()?);
        }
    }
    None
}
