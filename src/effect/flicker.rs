//! Quantum flicker
//!
//! Every step a random subset of pixels jumps to a random color.

use embassy_time::{Duration, Instant};

use super::Effect;
use super::noise::Rng;
use crate::canvas::PixelCanvas;
use crate::frame_scheduler::StepClock;

const RECOLOR_PROBABILITY: f32 = 0.2;
const STEP_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub struct FlickerEffect {
    rng: Rng,
    clock: StepClock,
}

impl FlickerEffect {
    pub const fn new(seed: u64) -> Self {
        Self {
            rng: Rng::new(seed),
            clock: StepClock::new(STEP_INTERVAL),
        }
    }
}

impl Effect for FlickerEffect {
    fn render<const N: usize>(&mut self, now: Instant, canvas: &mut PixelCanvas<N>) {
        if !self.clock.poll(now) {
            return;
        }

        for led in canvas.pixels_mut() {
            if self.rng.chance(RECOLOR_PROBABILITY) {
                *led = self.rng.next_color();
            }
        }
    }

    fn reset(&mut self) {
        self.clock.reset();
    }
}
