//! 8-bit fixed-point helpers

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Blend two 8-bit values (0 = all `a`, 255 = all `b`)
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i32 - a as i32;
    let scaled = (a as i32) * 255 + delta * amount_of_b as i32;
    // Round to nearest on the 0..=255*255 scale
    ((scaled + 127) / 255) as u8
}
