//! Keyframe brightness curves
//!
//! A curve maps a normalized time axis (0-255) to a brightness value
//! (0-255) by linear interpolation between keyframes. Curves are plain
//! data: they are built once and shared read-only by any number of tracks.

use core::fmt;

use crate::math8::lerp8;

/// Maximum number of keyframes a single curve can hold
pub const MAX_KEYFRAMES: usize = 8;

/// A single point of a curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyframe {
    /// Normalized time (0 = start of the track, 255 = end)
    pub time: u8,
    /// Brightness at this time
    pub value: u8,
}

impl Keyframe {
    pub const fn new(time: u8, value: u8) -> Self {
        Self { time, value }
    }
}

/// Reasons a keyframe table is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// Fewer than two keyframes
    TooFewKeyframes,
    /// More keyframes than [`MAX_KEYFRAMES`]
    TooManyKeyframes,
    /// The first keyframe is not at time 0
    StartNotAtZero,
    /// The last keyframe is not at time 255
    EndNotAtMax,
    /// Keyframe times are not strictly increasing at this position
    NotAscending(usize),
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewKeyframes => write!(f, "curve needs at least two keyframes"),
            Self::TooManyKeyframes => {
                write!(f, "curve holds at most {} keyframes", MAX_KEYFRAMES)
            }
            Self::StartNotAtZero => write!(f, "first keyframe must be at time 0"),
            Self::EndNotAtMax => write!(f, "last keyframe must be at time 255"),
            Self::NotAscending(i) => {
                write!(f, "keyframe {} is not after the previous one", i)
            }
        }
    }
}

/// Immutable keyframe table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Curve {
    keyframes: [Keyframe; MAX_KEYFRAMES],
    count: u8,
}

impl Curve {
    /// Build a curve, panicking on a malformed table.
    ///
    /// Intended for `const`/`static` curves, where a malformed table becomes
    /// a compile error.
    pub const fn new(keyframes: &[Keyframe]) -> Self {
        match Self::try_new(keyframes) {
            Ok(curve) => curve,
            Err(CurveError::TooFewKeyframes) => panic!("curve needs at least two keyframes"),
            Err(CurveError::TooManyKeyframes) => panic!("curve has too many keyframes"),
            Err(CurveError::StartNotAtZero) => panic!("first keyframe must be at time 0"),
            Err(CurveError::EndNotAtMax) => panic!("last keyframe must be at time 255"),
            Err(CurveError::NotAscending(_)) => panic!("keyframe times must be ascending"),
        }
    }

    /// Build a curve from a keyframe table
    #[allow(clippy::cast_possible_truncation)]
    pub const fn try_new(keyframes: &[Keyframe]) -> Result<Self, CurveError> {
        let count = keyframes.len();
        if count < 2 {
            return Err(CurveError::TooFewKeyframes);
        }
        if count > MAX_KEYFRAMES {
            return Err(CurveError::TooManyKeyframes);
        }
        if keyframes[0].time != 0 {
            return Err(CurveError::StartNotAtZero);
        }
        if keyframes[count - 1].time != u8::MAX {
            return Err(CurveError::EndNotAtMax);
        }

        let mut table = [Keyframe::new(u8::MAX, 0); MAX_KEYFRAMES];
        table[0] = keyframes[0];
        let mut i = 1;
        while i < count {
            if keyframes[i].time <= keyframes[i - 1].time {
                return Err(CurveError::NotAscending(i));
            }
            table[i] = keyframes[i];
            i += 1;
        }

        Ok(Self {
            keyframes: table,
            count: count as u8,
        })
    }

    /// Valid keyframes, ordered by time
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes[..self.count as usize]
    }

    pub fn first(&self) -> Keyframe {
        self.keyframes[0]
    }

    pub fn last(&self) -> Keyframe {
        self.keyframes[self.count as usize - 1]
    }

    /// Brightness at normalized time `t`
    pub fn sample(&self, t: u8) -> u8 {
        let first = self.first();
        if t <= first.time {
            return first.value;
        }
        let last = self.last();
        if t >= last.time {
            return last.value;
        }

        let mut from = first;
        for &to in &self.keyframes()[1..] {
            if t <= to.time {
                return lerp8(from.value, to.value, t - from.time, to.time - from.time);
            }
            from = to;
        }
        last.value
    }
}

/// Full brightness throughout
pub static CONSTANT_ON: Curve = Curve::new(&[Keyframe::new(0, 255), Keyframe::new(255, 255)]);

/// Dark throughout
pub static CONSTANT_OFF: Curve = Curve::new(&[Keyframe::new(0, 0), Keyframe::new(255, 0)]);

/// Triangle peaking at the midpoint
pub static RAMP_UP_DOWN: Curve = Curve::new(&[
    Keyframe::new(0, 0),
    Keyframe::new(127, 255),
    Keyframe::new(255, 0),
]);

/// Full brightness for the first half, dark for the second
pub static ON_128_OFF_128: Curve = Curve::new(&[
    Keyframe::new(0, 255),
    Keyframe::new(127, 255),
    Keyframe::new(128, 0),
    Keyframe::new(255, 0),
]);
