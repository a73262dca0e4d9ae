use crate::color::{BLACK, Rgb};

/// Map a position on the color wheel to a color.
///
/// The wheel runs red -> green -> blue -> back to red over `0..=255`.
/// Positions outside that range map to black; callers normally mask the
/// position with `& 255` first.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn wheel(pos: i32) -> Rgb {
    if pos < 0 || pos > 255 {
        return BLACK;
    }
    let pos = pos as u8;
    if pos < 85 {
        return Rgb {
            r: 255 - pos * 3,
            g: pos * 3,
            b: 0,
        };
    }
    if pos < 170 {
        let pos = pos - 85;
        return Rgb {
            r: 0,
            g: 255 - pos * 3,
            b: pos * 3,
        };
    }
    let pos = pos - 170;
    Rgb {
        r: pos * 3,
        g: 0,
        b: 255 - pos * 3,
    }
}
