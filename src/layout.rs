//! Physical LED addressing
//!
//! Maps a logical `(face, led)` coordinate onto the flat index used by the
//! update queue and the hardware backends.

/// Number of addressable LEDs on the die
pub const LED_COUNT: usize = FaceLayout::DIE.led_count();

/// How LEDs are distributed over the faces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceLayout {
    /// Every face carries the same number of LEDs
    Grid { faces: u8, leds_per_face: u8 },
    /// Face `n` (zero based) carries `n + 1` LEDs, like the pips of a die
    Pips { faces: u8 },
}

impl FaceLayout {
    /// Six-sided die with one LED per pip (1 + 2 + ... + 6 = 21)
    pub const DIE: Self = Self::Pips { faces: 6 };

    pub const fn faces(self) -> u8 {
        match self {
            Self::Grid { faces, .. } | Self::Pips { faces } => faces,
        }
    }

    /// Number of LEDs on `face`, zero for faces outside the layout
    pub const fn leds_on_face(self, face: u8) -> u8 {
        if face >= self.faces() {
            return 0;
        }
        match self {
            Self::Grid { leds_per_face, .. } => leds_per_face,
            Self::Pips { .. } => face + 1,
        }
    }

    /// Total number of addressable LEDs
    pub const fn led_count(self) -> usize {
        let faces = self.faces() as usize;
        match self {
            Self::Grid { leds_per_face, .. } => faces * leds_per_face as usize,
            Self::Pips { .. } => faces * (faces + 1) / 2,
        }
    }

    /// Whether `(face, led)` addresses an LED of this layout
    pub const fn contains(self, face: u8, led: u8) -> bool {
        led < self.leds_on_face(face)
    }

    /// Flat index of the first LED on `face`
    const fn face_offset(self, face: u8) -> usize {
        let face = face as usize;
        match self {
            Self::Grid { leds_per_face, .. } => face * leds_per_face as usize,
            Self::Pips { .. } => face * (face + 1) / 2,
        }
    }

    /// Flat index of `(face, led)`
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the layout.
    pub const fn index(self, face: u8, led: u8) -> usize {
        assert!(self.contains(face, led), "LED coordinate outside of the face layout");
        self.face_offset(face) + led as usize
    }

    /// Inverse of [`FaceLayout::index`]
    #[allow(clippy::cast_possible_truncation)]
    pub fn coordinate(self, index: usize) -> Option<(u8, u8)> {
        (0..self.faces()).find_map(|face| {
            let offset = self.face_offset(face);
            let count = self.leds_on_face(face) as usize;
            (index >= offset && index < offset + count).then(|| (face, (index - offset) as u8))
        })
    }
}

/// Flat index of `(face, led)` on the die
///
/// # Panics
///
/// Panics if the coordinate does not exist on the die.
pub const fn led_index(face: u8, led: u8) -> usize {
    FaceLayout::DIE.index(face, led)
}
