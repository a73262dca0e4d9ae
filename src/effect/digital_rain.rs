//! Digital rain
//!
//! Pixels ignite bright green at random and fade out over the following
//! steps.

use embassy_time::{Duration, Instant};

use super::Effect;
use super::noise::Rng;
use crate::canvas::PixelCanvas;
use crate::color::Rgb;
use crate::frame_scheduler::StepClock;

const DROP_COLOR: Rgb = Rgb { r: 0, g: 255, b: 0 };
const IGNITE_PROBABILITY: f32 = 0.1;
const FADE_STEP: u8 = 10;
const STEP_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct DigitalRainEffect {
    rng: Rng,
    clock: StepClock,
}

impl DigitalRainEffect {
    pub const fn new(seed: u64) -> Self {
        Self {
            rng: Rng::new(seed),
            clock: StepClock::new(STEP_INTERVAL),
        }
    }
}

impl Effect for DigitalRainEffect {
    fn render<const N: usize>(&mut self, now: Instant, canvas: &mut PixelCanvas<N>) {
        if !self.clock.poll(now) {
            return;
        }

        for led in canvas.pixels_mut() {
            if self.rng.chance(IGNITE_PROBABILITY) {
                *led = DROP_COLOR;
            } else if led.g > 0 {
                *led = Rgb {
                    r: 0,
                    g: led.g.saturating_sub(FADE_STEP),
                    b: 0,
                };
            }
        }
    }

    fn reset(&mut self) {
        self.clock.reset();
    }
}
