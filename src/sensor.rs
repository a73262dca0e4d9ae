//! Rate-limited distance sampling.
//!
//! The echo sensor needs time between pings; reading it faster than
//! [`SamplerConfig::interval`] returns stale or garbage values.

use core::fmt;

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Default minimum time between two hardware reads
pub const DEFAULT_SENSOR_INTERVAL: Duration = Duration::from_millis(50);

/// Transient failure of a distance reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// No echo arrived within the driver's window
    Timeout,
    /// The driver produced a negative or non-finite distance
    InvalidReading,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => f.write_str("distance sensor timed out"),
            Self::InvalidReading => f.write_str("distance sensor returned an invalid reading"),
        }
    }
}

impl core::error::Error for SensorError {}

/// Abstract distance sensor
///
/// Implement this trait for the ranging hardware (HC-SR04 and the like).
/// The call may block for the echo time.
pub trait DistanceSensor {
    /// Measure the distance in centimeters
    fn read_distance(&mut self) -> Result<f32, SensorError>;
}

impl<S: DistanceSensor + ?Sized> DistanceSensor for &mut S {
    fn read_distance(&mut self) -> Result<f32, SensorError> {
        (**self).read_distance()
    }
}

/// Configuration for the sensor sampler
#[derive(Debug, Clone, Copy)]
pub struct SamplerConfig {
    /// Minimum time between hardware reads
    pub interval: Duration,
}

impl SamplerConfig {
    pub const DEFAULT: Self = Self {
        interval: DEFAULT_SENSOR_INTERVAL,
    };
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Wraps a [`DistanceSensor`] and limits how often it is read
#[derive(Debug)]
pub struct SensorSampler<S> {
    sensor: S,
    interval: Duration,
    last_check: Instant,
}

impl<S: DistanceSensor> SensorSampler<S> {
    /// Create a sampler; the first read happens one interval after `start`
    pub const fn new(sensor: S, config: &SamplerConfig, start: Instant) -> Self {
        Self {
            sensor,
            interval: config.interval,
            last_check: start,
        }
    }

    /// Create a sampler with a custom interval
    pub const fn with_interval(sensor: S, interval: Duration, start: Instant) -> Self {
        Self::new(sensor, &SamplerConfig { interval }, start)
    }

    /// Read the sensor if the interval has elapsed
    ///
    /// Returns `None` when it is not yet time to sample and when the read
    /// failed. Either way the caller keeps its previous distance.
    pub fn sample(&mut self, now: Instant) -> Option<f32> {
        if now.saturating_duration_since(self.last_check) < self.interval {
            return None;
        }
        self.last_check = now;

        match self.read_checked() {
            Ok(distance) => Some(distance),
            Err(_err) => {
                #[cfg(feature = "esp32-log")]
                println!("Sensor reading failed ({}). Retrying!", _err);
                None
            }
        }
    }

    /// Time of the last hardware read attempt
    pub const fn last_check(&self) -> Instant {
        self.last_check
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Get a reference to the wrapped sensor
    pub const fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Get a mutable reference to the wrapped sensor
    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    fn read_checked(&mut self) -> Result<f32, SensorError> {
        let distance = self.sensor.read_distance()?;
        if !distance.is_finite() || distance < 0.0 {
            return Err(SensorError::InvalidReading);
        }
        Ok(distance)
    }
}
