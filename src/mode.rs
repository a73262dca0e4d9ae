//! Cyclic mode selection.
//!
//! The mode only ever moves forward by one, wrapping after the last effect.

use crate::effect::EffectId;

/// Number of selectable modes
pub const MAX_MODES: u8 = 8;

/// Successor of `mode`, wrapping at [`MAX_MODES`]
pub const fn advance(mode: u8) -> u8 {
    (mode % MAX_MODES + 1) % MAX_MODES
}

/// Holds the current mode index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeController {
    index: u8,
}

impl ModeController {
    /// Start at mode 0
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Current mode index, always below [`MAX_MODES`]
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Effect selected by the current mode
    pub const fn current(&self) -> EffectId {
        EffectId::from_index(self.index)
    }

    /// Move to the next mode and return its effect
    pub const fn advance(&mut self) -> EffectId {
        self.index = advance(self.index);
        self.current()
    }
}
