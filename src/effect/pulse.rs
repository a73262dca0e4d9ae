//! Neon pulse
//!
//! Cross-fades through a fixed palette. Each color fades out from full level
//! to black and back up again before the next one takes over.

use embassy_time::{Duration, Instant};

use super::Effect;
use crate::canvas::PixelCanvas;
use crate::color::{Rgb, scale_color};
use crate::frame_scheduler::StepClock;

pub const NEON_PALETTE: [Rgb; 3] = [
    Rgb { r: 0, g: 255, b: 255 }, // Cyan
    Rgb { r: 255, g: 0, b: 255 }, // Magenta
    Rgb { r: 255, g: 255, b: 0 }, // Yellow
];

const STEPS_PER_COLOR: u16 = 100;
const STEP_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub struct PulseEffect {
    palette: &'static [Rgb],
    step: u16,
    clock: StepClock,
}

impl Default for PulseEffect {
    fn default() -> Self {
        Self::new(&NEON_PALETTE)
    }
}

impl PulseEffect {
    pub const fn new(palette: &'static [Rgb]) -> Self {
        Self {
            palette,
            step: 0,
            clock: StepClock::new(STEP_INTERVAL),
        }
    }

    /// Level (0.0-1.0) of step `i` within one color's pulse
    pub fn level(i: u16) -> f32 {
        let half = f32::from(STEPS_PER_COLOR / 2);
        libm::fabsf((f32::from(i) - half) / half)
    }

    /// Total number of steps in one pass over the palette
    fn cycle_len(&self) -> u16 {
        u16::try_from(self.palette.len())
            .unwrap_or(u16::MAX)
            .saturating_mul(STEPS_PER_COLOR)
    }
}

impl Effect for PulseEffect {
    fn render<const N: usize>(&mut self, now: Instant, canvas: &mut PixelCanvas<N>) {
        if self.palette.is_empty() || !self.clock.poll(now) {
            return;
        }

        let color = self.palette[usize::from(self.step / STEPS_PER_COLOR)];
        let level = Self::level(self.step % STEPS_PER_COLOR);
        canvas.fill(scale_color(color, level));

        self.step = (self.step + 1) % self.cycle_len();
    }

    fn reset(&mut self) {
        self.step = 0;
        self.clock.reset();
    }
}
