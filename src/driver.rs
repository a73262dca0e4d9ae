//! [`PixelStrip`] adapter for `smart-leds` drivers.

use smart_leds::{SmartLedsWrite, brightness};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PixelStrip;
use crate::brightness::to_u8;
use crate::color::Rgb;

/// Drives any [`SmartLedsWrite`] implementation (WS2812 over SPI, RMT, PIO, ...)
///
/// The global brightness is applied while the frame is streamed out, so the
/// canvas always holds full-level colors.
#[derive(Debug)]
pub struct SmartLedsStrip<W> {
    writer: W,
    brightness: u8,
}

impl<W> SmartLedsStrip<W> {
    /// Wrap a driver at full brightness
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            brightness: 255,
        }
    }

    /// Current brightness on the 0-255 scale
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> PixelStrip for SmartLedsStrip<W>
where
    W: SmartLedsWrite,
    Rgb: Into<W::Color>,
{
    fn write(&mut self, colors: &[Rgb]) {
        let frame = brightness(colors.iter().copied(), self.brightness);
        if self.writer.write(frame).is_err() {
            // Flushing is best-effort; the next frame retries
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsStrip.write] failed to write {} pixels", colors.len());
        }
    }

    fn set_brightness(&mut self, brightness: f32) {
        self.brightness = to_u8(brightness);
    }
}
