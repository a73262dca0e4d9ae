//! Color chase
//!
//! Paints the strip one pixel per step, then starts over from the first pixel.

use embassy_time::{Duration, Instant};

use super::Effect;
use crate::canvas::PixelCanvas;
use crate::color::Rgb;
use crate::frame_scheduler::StepClock;

#[derive(Debug, Clone)]
pub struct ColorChaseEffect {
    color: Rgb,
    position: usize,
    clock: StepClock,
}

impl ColorChaseEffect {
    pub const fn new(color: Rgb, interval: Duration) -> Self {
        Self {
            color,
            position: 0,
            clock: StepClock::new(interval),
        }
    }

    /// Index of the next pixel to paint
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl Effect for ColorChaseEffect {
    fn render<const N: usize>(&mut self, now: Instant, canvas: &mut PixelCanvas<N>) {
        if canvas.is_empty() || !self.clock.poll(now) {
            return;
        }

        canvas.set(self.position, self.color);
        self.position = (self.position + 1) % canvas.len();
    }

    fn reset(&mut self) {
        self.position = 0;
        self.clock.reset();
    }
}
