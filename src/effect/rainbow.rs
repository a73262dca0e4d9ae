//! Rainbow cycle
//!
//! Spreads the whole color wheel across the strip and rotates it by one
//! wheel position per frame.

use embassy_time::Instant;

use super::Effect;
use crate::canvas::PixelCanvas;
use crate::color::wheel;

#[derive(Debug, Clone, Default)]
pub struct RainbowEffect {
    /// Wheel offset, wraps after 255
    phase: u8,
}

impl RainbowEffect {
    pub const fn new() -> Self {
        Self { phase: 0 }
    }

    pub const fn phase(&self) -> u8 {
        self.phase
    }
}

impl Effect for RainbowEffect {
    fn render<const N: usize>(&mut self, _now: Instant, canvas: &mut PixelCanvas<N>) {
        let len = canvas.len();
        if len == 0 {
            return;
        }
        let phase = usize::from(self.phase);
        for (i, led) in canvas.pixels_mut().iter_mut().enumerate() {
            let index = (i * 256 / len + phase) & 255;
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            {
                *led = wheel(index as i32);
            }
        }
        self.phase = self.phase.wrapping_add(1);
    }

    fn reset(&mut self) {
        self.phase = 0;
    }
}
