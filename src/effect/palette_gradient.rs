//! Palette gradient
//!
//! Holds a center gradient of each palette color for a second, then moves on.

use embassy_time::{Duration, Instant};

use super::Effect;
use crate::canvas::PixelCanvas;
use crate::color::{Rgb, rgb_from_u32};
use crate::frame_scheduler::StepClock;

#[allow(clippy::unreadable_literal)]
pub const TWILIGHT_PALETTE: [Rgb; 3] = [
    rgb_from_u32(0x800080), // Purple
    rgb_from_u32(0x4B0082), // Indigo
    rgb_from_u32(0x0000FF), // Blue
];

const HOLD: Duration = Duration::from_millis(1_000);

#[derive(Debug, Clone)]
pub struct PaletteGradientEffect {
    palette: &'static [Rgb],
    index: usize,
    clock: StepClock,
}

impl Default for PaletteGradientEffect {
    fn default() -> Self {
        Self::new(&TWILIGHT_PALETTE)
    }
}

impl PaletteGradientEffect {
    pub const fn new(palette: &'static [Rgb]) -> Self {
        Self {
            palette,
            index: 0,
            clock: StepClock::new(HOLD),
        }
    }
}

impl Effect for PaletteGradientEffect {
    fn render<const N: usize>(&mut self, now: Instant, canvas: &mut PixelCanvas<N>) {
        if self.palette.is_empty() || !self.clock.poll(now) {
            return;
        }

        canvas.fill_center_gradient(self.palette[self.index]);
        self.index = (self.index + 1) % self.palette.len();
    }

    fn reset(&mut self) {
        self.index = 0;
        self.clock.reset();
    }
}
