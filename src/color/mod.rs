mod gradient;
mod utils;
mod wheel;

pub use gradient::fill_center_gradient;
pub use utils::{blend_colors, fade_color, rgb_from_u32, scale_color};
pub use wheel::wheel;

use smart_leds::RGB8;

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
