use smart_leds::{SmartLedsWrite, brightness};

use crate::LedBackend;
use crate::color::{BLACK, Rgb};
use crate::layout::LED_COUNT;

/// Addressable RGB chain driven through a [`SmartLedsWrite`] writer
/// (APA102, WS2812 and friends)
pub struct RgbLeds<W, const N: usize = LED_COUNT> {
    writer: W,
    pixels: [Rgb; N],
    brightness: u8,
}

impl<W, const N: usize> RgbLeds<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            pixels: [BLACK; N],
            brightness: u8::MAX,
        }
    }

    /// Scale every pixel by a global brightness when flushing
    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Buffered colors, as they will be sent on the next flush
    pub fn pixels(&self) -> &[Rgb; N] {
        &self.pixels
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> LedBackend for RgbLeds<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    type Error = W::Error;

    fn led_count(&self) -> usize {
        N
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        self.pixels[index] = color;
    }

    fn clear(&mut self) {
        self.pixels = [BLACK; N];
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        let pixels = self.pixels.iter().copied();
        if self.brightness == u8::MAX {
            self.writer.write(pixels)
        } else {
            self.writer.write(brightness(pixels, self.brightness))
        }
    }
}
