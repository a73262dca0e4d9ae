#![no_std]

pub mod brightness;
pub mod canvas;
pub mod color;
pub mod controller;
pub mod driver;
pub mod effect;
pub mod frame_scheduler;
pub mod gesture;
pub mod math8;
pub mod mode;
pub mod sensor;

pub use brightness::{BrightnessConfig, BrightnessFilter, BrightnessLevels};
pub use canvas::PixelCanvas;
pub use controller::{Controller, ControllerConfig, ControllerState, TickReport};
pub use driver::SmartLedsStrip;
pub use effect::{Effect, EffectId, EffectSlot};
pub use frame_scheduler::StepClock;
pub use gesture::{GestureConfig, GestureDetector};
pub use mode::{MAX_MODES, ModeController};
pub use sensor::{DistanceSensor, SamplerConfig, SensorError, SensorSampler};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract pixel strip driver
///
/// Implement this trait to support different hardware platforms.
/// The controller is generic over this trait.
pub trait PixelStrip {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);

    /// Set the global brightness (0.0-1.0) applied on the next write
    fn set_brightness(&mut self, brightness: f32);
}
