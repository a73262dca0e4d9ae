use embassy_time::{Duration, Instant, block_for};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PixelStrip;
use crate::brightness::{BrightnessConfig, BrightnessFilter, BrightnessLevels};
use crate::canvas::PixelCanvas;
use crate::effect::noise::Rng;
use crate::effect::{EffectId, EffectSlot};
use crate::gesture::{GestureConfig, GestureDetector};
use crate::mode::ModeController;
use crate::sensor::{DistanceSensor, SamplerConfig, SensorSampler};

/// Number of pixels on the reference strip
pub const DEFAULT_NUM_PIXELS: usize = 216;

/// Pause between two loop iterations
pub const DEFAULT_YIELD: Duration = Duration::from_millis(1);

const DEFAULT_SEED: u64 = 0x5eed_1dea_b0a7_f00d;

/// Configuration for the controller
#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    pub sampler: SamplerConfig,
    pub gesture: GestureConfig,
    pub brightness: BrightnessConfig,
    /// How long the caller should yield after each tick
    pub yield_duration: Duration,
    /// Seed for the random effects
    pub seed: u64,
}

impl ControllerConfig {
    pub const DEFAULT: Self = Self {
        sampler: SamplerConfig::DEFAULT,
        gesture: GestureConfig::DEFAULT,
        brightness: BrightnessConfig::DEFAULT,
        yield_duration: DEFAULT_YIELD,
        seed: DEFAULT_SEED,
    };
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Everything the loop carries from one tick to the next
#[derive(Debug, Clone)]
pub struct ControllerState {
    distance: Option<f32>,
    levels: BrightnessLevels,
    mode: ModeController,
    effect: EffectSlot,
}

impl ControllerState {
    /// Latest successful distance reading
    pub const fn distance(&self) -> Option<f32> {
        self.distance
    }

    pub const fn levels(&self) -> BrightnessLevels {
        self.levels
    }

    /// Brightness currently applied to the strip
    pub const fn brightness(&self) -> f32 {
        self.levels.current
    }

    pub const fn mode(&self) -> ModeController {
        self.mode
    }

    pub const fn effect(&self) -> &EffectSlot {
        &self.effect
    }
}

/// Outcome of a single [`Controller::tick`]
#[derive(Debug, Clone, Copy)]
pub struct TickReport {
    /// Distance read during this tick, if the sensor was sampled successfully
    pub distance: Option<f32>,
    /// Whether a gesture advanced the mode
    pub gesture: bool,
    /// Effect active after this tick
    pub effect: EffectId,
    /// Brightness applied after this tick
    pub brightness: f32,
    /// Whether the strip was written
    pub flushed: bool,
    /// How long to wait before the next tick
    pub sleep_duration: Duration,
}

/// Controller - the main loop
///
/// Fuses sensor readings into brightness and mode changes and renders one
/// step of the current effect per tick.
pub struct Controller<S: DistanceSensor, P: PixelStrip, const N: usize> {
    // External dependencies and configuration
    sampler: SensorSampler<S>,
    strip: P,
    yield_duration: Duration,

    // Internal state
    state: ControllerState,
    canvas: PixelCanvas<N>,
    rng: Rng,

    // Internal dependencies
    gestures: GestureDetector,
    filter: BrightnessFilter,
}

impl<S: DistanceSensor, P: PixelStrip, const N: usize> Controller<S, P, N> {
    /// Create a controller starting at `now`
    ///
    /// The strip is set to the initial (minimum) brightness right away.
    pub fn new(sensor: S, mut strip: P, config: &ControllerConfig, now: Instant) -> Self {
        let mut rng = Rng::new(config.seed);
        let mode = ModeController::new();
        let levels = BrightnessLevels::initial(&config.brightness);
        strip.set_brightness(levels.current);

        Self {
            sampler: SensorSampler::new(sensor, &config.sampler, now),
            strip,
            yield_duration: config.yield_duration,
            state: ControllerState {
                distance: None,
                levels,
                mode,
                effect: mode.current().to_slot(rng.next_u64()),
            },
            canvas: PixelCanvas::new(),
            rng,
            gestures: GestureDetector::new(config.gesture),
            filter: BrightnessFilter::new(config.brightness),
        }
    }

    /// Run one loop iteration
    ///
    /// Samples the sensor if due, renders one step of the current effect and
    /// flushes the canvas if it changed. The caller sleeps for
    /// [`TickReport::sleep_duration`] before ticking again.
    pub fn tick(&mut self, now: Instant) -> TickReport {
        let distance = self.sampler.sample(now);
        let gesture = distance.is_some_and(|distance| self.process_reading(distance, now));

        self.state.effect.render(now, &mut self.canvas);
        let flushed = self.canvas.flush(&mut self.strip);

        TickReport {
            distance,
            gesture,
            effect: self.state.effect.id(),
            brightness: self.state.levels.current,
            flushed,
            sleep_duration: self.yield_duration,
        }
    }

    /// Loop forever on the system clock
    pub fn run(&mut self) -> ! {
        loop {
            let report = self.tick(Instant::now());
            block_for(report.sleep_duration);
        }
    }

    /// Apply a fresh reading to gesture, brightness and mode state
    ///
    /// Returns `true` if a gesture fired.
    fn process_reading(&mut self, distance: f32, now: Instant) -> bool {
        let mut fired = false;

        // The gesture zone wins over the brightness band where they touch
        if self.gestures.in_zone(distance) {
            fired = self.gestures.detect(distance, now);
            if fired {
                let effect = self.state.mode.advance();
                self.set_effect(effect);
                #[cfg(feature = "esp32-log")]
                println!("Gesture detected! Switching to mode {}", effect.index());
            }
        } else {
            let levels = self.filter.update(distance, self.state.levels);
            if levels.current != self.state.levels.current {
                self.strip.set_brightness(levels.current);
                // Brightness is applied on write
                self.canvas.mark_dirty();
            }
            self.state.levels = levels;
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "Mode: {}, Distance: {:.2} cm, Brightness: {:.2}",
            self.state.mode.index(),
            distance,
            self.state.levels.current
        );

        self.gestures.track(distance);
        self.state.distance = Some(distance);
        fired
    }

    /// Set new effect by id
    fn set_effect(&mut self, effect: EffectId) {
        self.state.effect = effect.to_slot(self.rng.next_u64());
        self.state.effect.reset();
    }

    pub const fn state(&self) -> &ControllerState {
        &self.state
    }

    pub const fn canvas(&self) -> &PixelCanvas<N> {
        &self.canvas
    }

    /// Get a reference to the pixel strip
    pub const fn strip(&self) -> &P {
        &self.strip
    }

    /// Get a reference to the sensor sampler
    pub const fn sampler(&self) -> &SensorSampler<S> {
        &self.sampler
    }

    /// Get a mutable reference to the sensor sampler
    pub fn sampler_mut(&mut self) -> &mut SensorSampler<S> {
        &mut self.sampler
    }
}
