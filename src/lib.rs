#![no_std]

pub mod animation;
pub mod backend;
pub mod color;
pub mod curve;
pub mod debug;
pub mod layout;
pub mod leds;
pub mod library;
pub mod math8;
pub mod playback;
pub mod queue;
pub mod scheduler;
pub mod track;

pub use animation::{Animation, MAX_TRACKS, TooManyTracks};
pub use backend::{GpioLeds, RgbLeds};
pub use curve::{
    CONSTANT_OFF, CONSTANT_ON, Curve, CurveError, Keyframe, MAX_KEYFRAMES, ON_128_OFF_128,
    RAMP_UP_DOWN,
};
pub use debug::{DebugLog, Loggable, Radix};
pub use layout::{FaceLayout, LED_COUNT, led_index};
pub use leds::{LedError, Leds, LedsState};
pub use library::{AnimationId, AnimationLibrary};
pub use playback::{PlaybackChannel, PlaybackReceiver, PlaybackRequest, PlaybackSender};
pub use queue::{LedWrite, UpdateQueue};
pub use scheduler::{TickResult, TickScheduler};
pub use track::Track;

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED hardware
///
/// Implement this trait to support different LED hardware. The facade only
/// talks to the hardware through it: pixels are buffered by `set_pixel` and
/// `clear`, and reach the LEDs on `flush`.
pub trait LedBackend {
    /// Error reported by the hardware on flush
    type Error;

    /// Number of LEDs the backend drives
    fn led_count(&self) -> usize;

    /// Buffer a color for one LED
    ///
    /// Panics if `index` is not below [`LedBackend::led_count`].
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Buffer black for every LED
    fn clear(&mut self);

    /// Push the buffer to the LEDs
    fn flush(&mut self) -> Result<(), Self::Error>;
}
