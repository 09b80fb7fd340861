//! Reading back the TIFF container written by the converter.

fn read_u16(data: &[u8], at: usize) -> Option<u16> {
    let bytes = data.get(at..at + 2)?;
    Some(u16::from_le_bytes([bytes[0], bytes[1]]))
}

fn read_u32(data: &[u8], at: usize) -> Option<u32> {
    let bytes = data.get(at..at + 4)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Look up a single-valued SHORT or LONG tag in the first IFD of a
/// little-endian TIFF
pub fn read_tag(tiff: &[u8], wanted: u16) -> Option<u32> {
    if tiff.get(0..4)? != b"II\x2A\x00" {
        return None;
    }
    let ifd = read_u32(tiff, 4)? as usize;
    let count = read_u16(tiff, ifd)? as usize;
    (0..count)
        .map(|i| ifd + 2 + i * 12)
        .find(|&entry| read_u16(tiff, entry) == Some(wanted))
        .and_then(|entry| match read_u16(tiff, entry + 2)? {
            3 => read_u16(tiff, entry + 8).map(u32::from),
            4 => read_u32(tiff, entry + 8),
            _ => None,
        })
}

/// Strip data of a single-strip TIFF
pub fn strip(tiff: &[u8]) -> Option<&[u8]> {
    let offset = read_tag(tiff, 273)? as usize;
    let len = read_tag(tiff, 279)? as usize;
    tiff.get(offset..offset + len)
}
