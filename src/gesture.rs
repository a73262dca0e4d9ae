//! Hand-wave detection close to the sensor.

use embassy_time::{Duration, Instant};

/// Configuration for the gesture detector
#[derive(Debug, Clone, Copy)]
pub struct GestureConfig {
    /// Maximum distance (cm) at which a gesture is recognized
    pub zone_cm: f32,
    /// Minimum jump (cm) between two readings to count as a gesture
    pub threshold_cm: f32,
    /// Minimum time between two gestures
    pub cooldown: Duration,
}

impl GestureConfig {
    pub const DEFAULT: Self = Self {
        zone_cm: 10.0,
        threshold_cm: 5.0,
        cooldown: Duration::from_millis(1_000),
    };
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Debounced gesture state machine
///
/// A gesture fires when a reading is inside the zone, differs from the
/// previous reading by more than the threshold, and the cooldown since the
/// last gesture has passed.
#[derive(Debug, Clone)]
pub struct GestureDetector {
    config: GestureConfig,
    last_distance: f32,
    last_gesture: Instant,
}

impl GestureDetector {
    pub const fn new(config: GestureConfig) -> Self {
        Self {
            config,
            last_distance: 0.0,
            last_gesture: Instant::from_millis(0),
        }
    }

    pub const fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Whether `distance` lies inside the gesture zone
    pub fn in_zone(&self, distance: f32) -> bool {
        distance <= self.config.zone_cm
    }

    /// Check a reading against the previous one
    ///
    /// Returns `true` and restarts the cooldown if a gesture fired.
    /// Does not record `distance`; call [`Self::track`] for that.
    pub fn detect(&mut self, distance: f32, now: Instant) -> bool {
        let jump = libm::fabsf(distance - self.last_distance);
        let fired = self.in_zone(distance)
            && jump > self.config.threshold_cm
            && now.saturating_duration_since(self.last_gesture) > self.config.cooldown;
        if fired {
            self.last_gesture = now;
        }
        fired
    }

    /// Record the latest successful reading
    pub fn track(&mut self, distance: f32) {
        self.last_distance = distance;
    }

    pub const fn last_distance(&self) -> f32 {
        self.last_distance
    }

    /// Time of the last accepted gesture
    pub const fn last_gesture(&self) -> Instant {
        self.last_gesture
    }
}
