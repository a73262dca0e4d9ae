//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait and renders at most one step per
//! call, so no effect ever blocks the control loop.

mod color_chase;
mod digital_rain;
mod flicker;
mod heartbeat;
pub mod noise;
mod palette_gradient;
mod pulse;
mod rainbow;
mod static_color;

use embassy_time::Instant;

pub use color_chase::ColorChaseEffect;
pub use digital_rain::DigitalRainEffect;
pub use flicker::FlickerEffect;
pub use heartbeat::HeartbeatEffect;
pub use palette_gradient::{PaletteGradientEffect, TWILIGHT_PALETTE};
pub use pulse::{NEON_PALETTE, PulseEffect};
pub use rainbow::RainbowEffect;
pub use static_color::StaticColorEffect;

use crate::canvas::PixelCanvas;
use crate::color::Rgb;
use crate::mode::MAX_MODES;

pub const SUN_ORANGE: Rgb = Rgb { r: 125, g: 100, b: 0 };
pub const CYBERDECK_BLUE: Rgb = Rgb { r: 0, g: 20, b: 255 };

const EFFECT_NAME_RAINBOW: &str = "rainbow";
const EFFECT_NAME_SUN_ORANGE: &str = "sun_orange";
const EFFECT_NAME_CYBERDECK_BLUE: &str = "cyberdeck_blue";
const EFFECT_NAME_NEON_PULSE: &str = "neon_pulse";
const EFFECT_NAME_DIGITAL_RAIN: &str = "digital_rain";
const EFFECT_NAME_HEARTBEAT: &str = "heartbeat";
const EFFECT_NAME_QUANTUM_FLICKER: &str = "quantum_flicker";
const EFFECT_NAME_PALETTE_GRADIENT: &str = "palette_gradient";

const EFFECT_ID_RAINBOW: u8 = 0;
const EFFECT_ID_SUN_ORANGE: u8 = 1;
const EFFECT_ID_CYBERDECK_BLUE: u8 = 2;
const EFFECT_ID_NEON_PULSE: u8 = 3;
const EFFECT_ID_DIGITAL_RAIN: u8 = 4;
const EFFECT_ID_HEARTBEAT: u8 = 5;
const EFFECT_ID_QUANTUM_FLICKER: u8 = 6;
const EFFECT_ID_PALETTE_GRADIENT: u8 = 7;

pub trait Effect {
    /// Render the next step, if one is due
    ///
    /// Effects that have nothing new to show leave the canvas untouched.
    fn render<const N: usize>(&mut self, now: Instant, canvas: &mut PixelCanvas<N>);

    /// Reset effect state
    fn reset(&mut self) {}
}

/// Effect slot - enum containing all mode-bound effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Rotating color wheel
    Rainbow(RainbowEffect),
    /// Solid warm orange
    SunOrange(StaticColorEffect),
    /// Solid deep blue
    CyberdeckBlue(StaticColorEffect),
    /// Palette cross-fade
    NeonPulse(PulseEffect),
    /// Random green drops fading out
    DigitalRain(DigitalRainEffect),
    /// Double purple pulse with a pause
    Heartbeat(HeartbeatEffect),
    /// Random per-pixel recoloring
    QuantumFlicker(FlickerEffect),
    /// Center gradient over a short palette
    PaletteGradient(PaletteGradientEffect),
}

/// Known effect ids, one per mode index
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Rainbow = EFFECT_ID_RAINBOW,
    SunOrange = EFFECT_ID_SUN_ORANGE,
    CyberdeckBlue = EFFECT_ID_CYBERDECK_BLUE,
    NeonPulse = EFFECT_ID_NEON_PULSE,
    DigitalRain = EFFECT_ID_DIGITAL_RAIN,
    Heartbeat = EFFECT_ID_HEARTBEAT,
    QuantumFlicker = EFFECT_ID_QUANTUM_FLICKER,
    PaletteGradient = EFFECT_ID_PALETTE_GRADIENT,
}

impl Default for EffectSlot {
    fn default() -> Self {
        Self::Rainbow(RainbowEffect::new())
    }
}

impl EffectId {
    /// All effects in mode order
    pub const ALL: [Self; MAX_MODES as usize] = [
        Self::Rainbow,
        Self::SunOrange,
        Self::CyberdeckBlue,
        Self::NeonPulse,
        Self::DigitalRain,
        Self::Heartbeat,
        Self::QuantumFlicker,
        Self::PaletteGradient,
    ];

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_RAINBOW => Self::Rainbow,
            EFFECT_ID_SUN_ORANGE => Self::SunOrange,
            EFFECT_ID_CYBERDECK_BLUE => Self::CyberdeckBlue,
            EFFECT_ID_NEON_PULSE => Self::NeonPulse,
            EFFECT_ID_DIGITAL_RAIN => Self::DigitalRain,
            EFFECT_ID_HEARTBEAT => Self::Heartbeat,
            EFFECT_ID_QUANTUM_FLICKER => Self::QuantumFlicker,
            EFFECT_ID_PALETTE_GRADIENT => Self::PaletteGradient,
            _ => return None,
        })
    }

    /// Effect for a mode index, wrapping out-of-range indices
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index % MAX_MODES) as usize]
    }

    /// Mode index of this effect
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Build a fresh slot; `seed` feeds the random effects
    pub const fn to_slot(self, seed: u64) -> EffectSlot {
        match self {
            Self::Rainbow => EffectSlot::Rainbow(RainbowEffect::new()),
            Self::SunOrange => EffectSlot::SunOrange(StaticColorEffect::new(SUN_ORANGE)),
            Self::CyberdeckBlue => {
                EffectSlot::CyberdeckBlue(StaticColorEffect::new(CYBERDECK_BLUE))
            }
            Self::NeonPulse => EffectSlot::NeonPulse(PulseEffect::new(&NEON_PALETTE)),
            Self::DigitalRain => EffectSlot::DigitalRain(DigitalRainEffect::new(seed)),
            Self::Heartbeat => EffectSlot::Heartbeat(HeartbeatEffect::new()),
            Self::QuantumFlicker => EffectSlot::QuantumFlicker(FlickerEffect::new(seed)),
            Self::PaletteGradient => {
                EffectSlot::PaletteGradient(PaletteGradientEffect::new(&TWILIGHT_PALETTE))
            }
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::SunOrange => EFFECT_NAME_SUN_ORANGE,
            Self::CyberdeckBlue => EFFECT_NAME_CYBERDECK_BLUE,
            Self::NeonPulse => EFFECT_NAME_NEON_PULSE,
            Self::DigitalRain => EFFECT_NAME_DIGITAL_RAIN,
            Self::Heartbeat => EFFECT_NAME_HEARTBEAT,
            Self::QuantumFlicker => EFFECT_NAME_QUANTUM_FLICKER,
            Self::PaletteGradient => EFFECT_NAME_PALETTE_GRADIENT,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_RAINBOW => Some(Self::Rainbow),
            EFFECT_NAME_SUN_ORANGE => Some(Self::SunOrange),
            EFFECT_NAME_CYBERDECK_BLUE => Some(Self::CyberdeckBlue),
            EFFECT_NAME_NEON_PULSE => Some(Self::NeonPulse),
            EFFECT_NAME_DIGITAL_RAIN => Some(Self::DigitalRain),
            EFFECT_NAME_HEARTBEAT => Some(Self::Heartbeat),
            EFFECT_NAME_QUANTUM_FLICKER => Some(Self::QuantumFlicker),
            EFFECT_NAME_PALETTE_GRADIENT => Some(Self::PaletteGradient),
            _ => None,
        }
    }
}

impl EffectSlot {
    /// Render the current effect
    pub fn render<const N: usize>(&mut self, now: Instant, canvas: &mut PixelCanvas<N>) {
        match self {
            Self::Rainbow(effect) => effect.render(now, canvas),
            Self::SunOrange(effect) | Self::CyberdeckBlue(effect) => effect.render(now, canvas),
            Self::NeonPulse(effect) => effect.render(now, canvas),
            Self::DigitalRain(effect) => effect.render(now, canvas),
            Self::Heartbeat(effect) => effect.render(now, canvas),
            Self::QuantumFlicker(effect) => effect.render(now, canvas),
            Self::PaletteGradient(effect) => effect.render(now, canvas),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::Rainbow(effect) => Effect::reset(effect),
            Self::SunOrange(effect) | Self::CyberdeckBlue(effect) => Effect::reset(effect),
            Self::NeonPulse(effect) => Effect::reset(effect),
            Self::DigitalRain(effect) => Effect::reset(effect),
            Self::Heartbeat(effect) => Effect::reset(effect),
            Self::QuantumFlicker(effect) => Effect::reset(effect),
            Self::PaletteGradient(effect) => Effect::reset(effect),
        }
    }

    /// Get the effect ID for external observation
    pub const fn id(&self) -> EffectId {
        match self {
            Self::Rainbow(_) => EffectId::Rainbow,
            Self::SunOrange(_) => EffectId::SunOrange,
            Self::CyberdeckBlue(_) => EffectId::CyberdeckBlue,
            Self::NeonPulse(_) => EffectId::NeonPulse,
            Self::DigitalRain(_) => EffectId::DigitalRain,
            Self::Heartbeat(_) => EffectId::Heartbeat,
            Self::QuantumFlicker(_) => EffectId::QuantumFlicker,
            Self::PaletteGradient(_) => EffectId::PaletteGradient,
        }
    }
}
