//! Distance to brightness mapping with exponential easing.
//!
//! Inside the control band a closer hand means a brighter strip. Past the far
//! edge the brightness holds. Below the near edge it drifts back to the last
//! level chosen inside the band.

/// Configuration for the brightness filter
#[derive(Debug, Clone, Copy)]
pub struct BrightnessConfig {
    /// Near edge (cm) of the control band, maps to `max`
    pub near_cm: f32,
    /// Far edge (cm) of the control band, maps to `min`
    pub far_cm: f32,
    /// Lowest brightness scalar
    pub min: f32,
    /// Highest brightness scalar
    pub max: f32,
    /// Fraction of the remaining gap closed per update (0.0, 1.0]
    pub easing: f32,
}

impl BrightnessConfig {
    pub const DEFAULT: Self = Self {
        near_cm: 10.0,
        far_cm: 40.0,
        min: 0.10,
        max: 0.95,
        easing: 0.75,
    };
}

impl Default for BrightnessConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Live brightness and the last level reached inside the band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessLevels {
    pub current: f32,
    pub last_set: f32,
}

impl BrightnessLevels {
    /// Startup levels: dim output, full fallback target
    pub const fn initial(config: &BrightnessConfig) -> Self {
        Self {
            current: config.min,
            last_set: config.max,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BrightnessFilter {
    config: BrightnessConfig,
}

impl Default for BrightnessFilter {
    fn default() -> Self {
        Self::new(BrightnessConfig::DEFAULT)
    }
}

impl BrightnessFilter {
    pub const fn new(config: BrightnessConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &BrightnessConfig {
        &self.config
    }

    /// Whether `distance` lies inside the control band
    pub fn in_band(&self, distance: f32) -> bool {
        (self.config.near_cm..=self.config.far_cm).contains(&distance)
    }

    /// Brightness the band maps `distance` to
    pub fn target(&self, distance: f32) -> f32 {
        let BrightnessConfig {
            near_cm,
            far_cm,
            min,
            max,
            ..
        } = self.config;
        let span = far_cm - near_cm;
        if span <= 0.0 {
            return max;
        }
        let range_pct = ((distance - near_cm) / span).clamp(0.0, 1.0);
        min + (max - min) * (1.0 - range_pct)
    }

    /// Advance the levels by one reading
    pub fn update(&self, distance: f32, levels: BrightnessLevels) -> BrightnessLevels {
        if self.in_band(distance) {
            let current = self.ease(levels.current, self.target(distance));
            return BrightnessLevels {
                current,
                last_set: current,
            };
        }
        if distance > self.config.far_cm {
            return levels;
        }
        BrightnessLevels {
            current: self.ease(levels.current, levels.last_set),
            last_set: levels.last_set,
        }
    }

    /// Move `current` toward `target` by the easing factor
    pub fn ease(&self, current: f32, target: f32) -> f32 {
        let easing = self.config.easing.clamp(0.0, 1.0);
        let value = current + (target - current) * easing;
        value.max(self.config.min).min(self.config.max)
    }
}

/// Convert a brightness scalar (0.0-1.0) to the 0-255 scale
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_u8(brightness: f32) -> u8 {
    libm::roundf(brightness.clamp(0.0, 1.0) * 255.0) as u8
}
