use embedded_hal::digital::{OutputPin, PinState};

use crate::LedBackend;
use crate::color::{Rgb, intensity};
use crate::layout::LED_COUNT;

/// Intensity from which an LED counts as lit
const DEFAULT_THRESHOLD: u8 = 128;

/// One plain on/off LED per GPIO pin
///
/// Colors are reduced to on/off by comparing their brightest channel with a
/// threshold.
pub struct GpioLeds<P, const N: usize = LED_COUNT> {
    pins: [P; N],
    lit: [bool; N],
    threshold: u8,
    active_low: bool,
}

impl<P: OutputPin, const N: usize> GpioLeds<P, N> {
    pub const fn new(pins: [P; N]) -> Self {
        Self {
            pins,
            lit: [false; N],
            threshold: DEFAULT_THRESHOLD,
            active_low: false,
        }
    }

    /// Set the intensity from which an LED is switched on
    #[must_use]
    pub const fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Drive pins low to light their LED
    #[must_use]
    pub const fn with_active_low(mut self) -> Self {
        self.active_low = true;
        self
    }

    /// Buffered on/off states, as they will be driven on the next flush
    pub fn lit(&self) -> &[bool; N] {
        &self.lit
    }

    pub fn pins(&self) -> &[P; N] {
        &self.pins
    }

    fn pin_state(&self, lit: bool) -> PinState {
        PinState::from(lit != self.active_low)
    }
}

impl<P: OutputPin, const N: usize> LedBackend for GpioLeds<P, N> {
    type Error = P::Error;

    fn led_count(&self) -> usize {
        N
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        self.lit[index] = intensity(color) >= self.threshold;
    }

    fn clear(&mut self) {
        self.lit = [false; N];
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        for index in 0..N {
            let state = self.pin_state(self.lit[index]);
            self.pins[index].set_state(state)?;
        }
        Ok(())
    }
}
