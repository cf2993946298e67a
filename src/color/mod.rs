use smart_leds::RGB8;

use crate::math8::scale8;

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Scale every channel of `tint` by a brightness sample
///
/// A white tint duplicates the sample across all three channels.
#[inline]
pub const fn tinted(tint: Rgb, value: u8) -> Rgb {
    Rgb {
        r: scale8(tint.r, value),
        g: scale8(tint.g, value),
        b: scale8(tint.b, value),
    }
}

/// Intensity of the brightest channel, used by monochrome outputs
#[inline]
pub fn intensity(color: Rgb) -> u8 {
    color.r.max(color.g).max(color.b)
}
