use crate::color::{Rgb, scale_color};

/// Render a gradient that spreads out from the center of the strip.
///
/// Pixels before the center fade toward black, pixels after it brighten
/// toward white-saturated channels. With an odd pixel count the exact center
/// pixel keeps the unblended base color.
#[allow(clippy::cast_precision_loss)]
pub fn fill_center_gradient(leds: &mut [Rgb], color: Rgb) {
    let len = leds.len();
    if len == 0 {
        return;
    }

    let half = len / 2;
    let odd = len % 2 == 1;
    // First index of the brightening side; the last pixel is written too
    let upper_start = if odd { half + 1 } else { half };

    if odd {
        leds[half] = color;
    }

    for i in 0..half {
        let factor = i as f32 / half as f32;
        leds[half - i - 1] = scale_color(color, 1.0 - factor);
        leds[upper_start + i] = scale_color(color, 1.0 + factor);
    }
}
