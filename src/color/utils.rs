use crate::color::Rgb;
use crate::math8::{blend8, scale8};

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub const fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Scale every channel by `factor`, truncating toward zero.
///
/// Factors above 1.0 brighten the color and saturate at 255.
/// Negative factors produce black.
#[inline]
pub fn scale_color(color: Rgb, factor: f32) -> Rgb {
    Rgb {
        r: scale_channel(color.r, factor),
        g: scale_channel(color.g, factor),
        b: scale_channel(color.b, factor),
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_channel(value: u8, factor: f32) -> u8 {
    // Float-to-int `as` casts saturate, which gives the 0..=255 clamp
    libm::truncf(f32::from(value) * factor) as u8
}

/// Dim a color toward black by `amount` (0 = unchanged, 255 = black)
#[inline]
pub const fn fade_color(color: Rgb, amount: u8) -> Rgb {
    let keep = 255 - amount;
    Rgb {
        r: scale8(color.r, keep),
        g: scale8(color.g, keep),
        b: scale8(color.b, keep),
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
