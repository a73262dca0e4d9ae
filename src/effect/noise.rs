//! Deterministic pseudo-random source for sparkle effects

use crate::color::Rgb;

/// SplitMix64 generator
///
/// Small, seedable and allocation-free. Not suitable for anything but visuals.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn next_u8(&mut self) -> u8 {
        (self.next_u64() >> 56) as u8
    }

    /// Uniform sample in `[0.0, 1.0)`
    #[allow(clippy::cast_precision_loss)]
    pub fn next_unit(&mut self) -> f32 {
        // 24 bits fit the f32 mantissa exactly
        (self.next_u32() >> 8) as f32 / 16_777_216.0
    }

    /// Returns `true` with the given probability
    pub fn chance(&mut self, probability: f32) -> bool {
        self.next_unit() < probability
    }

    /// Random color with independent channels
    pub fn next_color(&mut self) -> Rgb {
        Rgb {
            r: self.next_u8(),
            g: self.next_u8(),
            b: self.next_u8(),
        }
    }
}
