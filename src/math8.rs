use embassy_time::Duration;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// `scale8(255, x) == x` for every `x`, so a full channel scaled by a
/// brightness sample reproduces the sample exactly.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Linear interpolation between two 8-bit values
///
/// `position` runs from 0 at `a` to `span` at `b`. Uses a signed
/// intermediate and truncating division, so falling segments round
/// toward the upper value.
#[inline]
#[allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub const fn lerp8(a: u8, b: u8, position: u8, span: u8) -> u8 {
    if span == 0 {
        return b;
    }
    let delta = b as i32 - a as i32;
    let value = a as i32 + delta * position as i32 / span as i32;
    value as u8
}

/// Calculate progress (0-255) based on elapsed time and duration
///
/// A zero duration counts as already complete.
#[allow(clippy::cast_possible_truncation)]
#[inline]
pub const fn progress8(elapsed: Duration, duration: Duration) -> u8 {
    if elapsed.as_millis() >= duration.as_millis() {
        return 255;
    }

    ((elapsed.as_millis() * 255) / duration.as_millis()) as u8
}
