//! Heartbeat
//!
//! Two quick purple pulses followed by a pause.

use embassy_time::{Duration, Instant};

use super::Effect;
use crate::canvas::PixelCanvas;
use crate::color::Rgb;
use crate::frame_scheduler::StepClock;

const PULSES: u8 = 2;
const LEVEL_STEP: u8 = 15;
/// Steps on the way up (0..=240) and on the way down (255..=15)
const HALF_PULSE_STEPS: u8 = 17;
const PULSE_STEPS: u8 = HALF_PULSE_STEPS * 2;
const CYCLE_STEPS: u8 = PULSE_STEPS * PULSES;

const STEP_INTERVAL: Duration = Duration::from_micros(16_667);
const REST: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct HeartbeatEffect {
    step: u8,
    clock: StepClock,
}

impl Default for HeartbeatEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl HeartbeatEffect {
    pub const fn new() -> Self {
        Self {
            step: 0,
            clock: StepClock::new(STEP_INTERVAL),
        }
    }

    /// Purple level for a step of the cycle
    pub const fn level(step: u8) -> u8 {
        let within = step % PULSE_STEPS;
        if within < HALF_PULSE_STEPS {
            within * LEVEL_STEP
        } else {
            255 - (within - HALF_PULSE_STEPS) * LEVEL_STEP
        }
    }
}

impl Effect for HeartbeatEffect {
    fn render<const N: usize>(&mut self, now: Instant, canvas: &mut PixelCanvas<N>) {
        if !self.clock.poll(now) {
            return;
        }

        let level = Self::level(self.step);
        canvas.fill(Rgb {
            r: level,
            g: 0,
            b: level,
        });

        self.step += 1;
        if self.step == CYCLE_STEPS {
            self.step = 0;
            self.clock.delay(REST);
        }
    }

    fn reset(&mut self) {
        self.step = 0;
        self.clock.reset();
    }
}
