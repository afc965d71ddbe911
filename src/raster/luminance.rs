//! Packed RGB to luminance conversion using the ITU-R BT.601 weights.

/// Luminance above which a pixel counts as lit in black-and-white mode.
pub const BLACK_WHITE_THRESHOLD: u8 = 60;

/// Split a packed `0xAARRGGBB` pixel into its red, green and blue channels.
#[inline]
pub fn channels(pixel: u32) -> (u8, u8, u8) {
    (
        ((pixel >> 16) & 0xFF) as u8,
        ((pixel >> 8) & 0xFF) as u8,
        (pixel & 0xFF) as u8,
    )
}

/// Luminance of a packed pixel: Y = 0.299*R + 0.587*G + 0.114*B.
///
/// Coefficients are scaled by 1000 to stay in integer math; the result
/// truncates like a float-to-byte conversion would.
#[inline]
pub fn luminance(pixel: u32) -> u8 {
    let (r, g, b) = channels(pixel);
    let y = (299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000;
    y as u8
}

/// Hard black-and-white threshold on a luminance value.
#[inline]
pub fn black_white(intensity: u8) -> u8 {
    if intensity > BLACK_WHITE_THRESHOLD {
        255
    } else {
        0
    }
}

/// Pack red, green and blue channels into a pixel with zero alpha.
#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}
