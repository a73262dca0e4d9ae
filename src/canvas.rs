//! Frame buffer for the pixel strip.
//!
//! Effects draw into a [`PixelCanvas`]; the controller pushes it to the
//! hardware with [`PixelCanvas::flush`]. Nothing reaches the strip implicitly.

use crate::PixelStrip;
use crate::color::{BLACK, Rgb, fill_center_gradient};

/// Owned frame of `N` pixels, in physical strip order
#[derive(Debug, Clone)]
pub struct PixelCanvas<const N: usize> {
    pixels: [Rgb; N],
    /// Set by every mutation, cleared by a flush
    dirty: bool,
}

impl<const N: usize> Default for PixelCanvas<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PixelCanvas<N> {
    /// Create a black canvas
    pub const fn new() -> Self {
        Self {
            pixels: [BLACK; N],
            dirty: false,
        }
    }

    /// Number of pixels on the canvas
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Current frame contents
    pub const fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Mutable access to the whole frame; marks the canvas dirty
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        self.dirty = true;
        &mut self.pixels
    }

    /// Color of a single pixel
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.pixels.get(index).copied()
    }

    /// Set a single pixel
    ///
    /// Out-of-range indices are ignored and return `false`.
    pub fn set(&mut self, index: usize, color: Rgb) -> bool {
        let Some(pixel) = self.pixels.get_mut(index) else {
            return false;
        };
        *pixel = color;
        self.dirty = true;
        true
    }

    /// Fill every pixel with one color
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
        self.dirty = true;
    }

    /// Render a gradient spreading out from the center
    pub fn fill_center_gradient(&mut self, color: Rgb) {
        fill_center_gradient(&mut self.pixels, color);
        self.dirty = true;
    }

    /// Force the next flush to write the frame
    ///
    /// Used when something outside the frame, like the strip brightness,
    /// changed.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Whether the canvas changed since the last flush
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Push the frame to the strip if it changed
    ///
    /// Returns `true` if the strip was written.
    pub fn flush<P: PixelStrip>(&mut self, strip: &mut P) -> bool {
        if !self.dirty {
            return false;
        }
        strip.write(&self.pixels);
        self.dirty = false;
        true
    }
}
