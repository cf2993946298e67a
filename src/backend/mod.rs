//! Hardware backends
//!
//! Both backends keep a pixel buffer and only touch the hardware on
//! [`LedBackend::flush`](crate::LedBackend::flush).

mod gpio;
mod rgb;

pub use gpio::GpioLeds;
pub use rgb::RgbLeds;
