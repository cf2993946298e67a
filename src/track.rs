//! Curve playback on a single LED

use embassy_time::Duration;

use crate::color::{Rgb, WHITE, tinted};
use crate::curve::Curve;
use crate::layout::led_index;
use crate::math8::progress8;

/// One curve bound to one LED over a time window
///
/// The window opens `start_delay` after the owning animation starts and
/// stays open for `duration` (inclusive). Outside the window the track
/// produces no sample, so the LED keeps whatever was last written to it.
#[derive(Debug, Clone, Copy)]
pub struct Track<'a> {
    face: u8,
    led: u8,
    index: usize,
    start_delay: Duration,
    duration: Duration,
    curve: &'a Curve,
    tint: Rgb,
}

impl<'a> Track<'a> {
    /// Create a white track for the die LED at `(face, led)`
    ///
    /// # Panics
    ///
    /// Panics if `(face, led)` does not exist on the die.
    pub const fn new(
        face: u8,
        led: u8,
        start_delay: Duration,
        duration: Duration,
        curve: &'a Curve,
    ) -> Self {
        Self {
            face,
            led,
            index: led_index(face, led),
            start_delay,
            duration,
            curve,
            tint: WHITE,
        }
    }

    /// Set the color the brightness sample is applied to
    #[must_use]
    pub const fn with_tint(mut self, tint: Rgb) -> Self {
        self.tint = tint;
        self
    }

    pub const fn face(&self) -> u8 {
        self.face
    }

    pub const fn led(&self) -> u8 {
        self.led
    }

    /// Physical LED index
    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn start_delay(&self) -> Duration {
        self.start_delay
    }

    pub const fn duration(&self) -> Duration {
        self.duration
    }

    pub const fn curve(&self) -> &'a Curve {
        self.curve
    }

    /// Elapsed animation time after which the track is finished
    ///
    /// Saturates at [`Duration::MAX`], so a window too long to represent
    /// never finishes.
    pub fn end(&self) -> Duration {
        self.start_delay
            .checked_add(self.duration)
            .unwrap_or(Duration::MAX)
    }

    /// Whether the track has no more samples to produce at `elapsed`
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed > self.end()
    }

    /// Curve brightness at `elapsed` animation time
    ///
    /// Returns `None` before the window opens and after it closes.
    pub fn sample_at(&self, elapsed: Duration) -> Option<u8> {
        let local = elapsed.checked_sub(self.start_delay)?;
        if local > self.duration {
            return None;
        }
        Some(self.curve.sample(progress8(local, self.duration)))
    }

    /// [`Track::sample_at`] packed into the track color
    pub fn color_at(&self, elapsed: Duration) -> Option<Rgb> {
        self.sample_at(elapsed).map(|value| tinted(self.tint, value))
    }
}
