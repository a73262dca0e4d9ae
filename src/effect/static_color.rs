//! Static color fill effect
//!
//! Fills all LEDs with a single solid color.

use embassy_time::Instant;

use super::Effect;
use crate::canvas::PixelCanvas;
use crate::color::Rgb;

/// Static color effect - fills all LEDs with one color
#[derive(Debug, Clone)]
pub struct StaticColorEffect {
    color: Rgb,
}

impl StaticColorEffect {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }
}

impl Effect for StaticColorEffect {
    fn render<const N: usize>(&mut self, _now: Instant, canvas: &mut PixelCanvas<N>) {
        canvas.fill(self.color);
    }
}
