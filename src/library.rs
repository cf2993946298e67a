//! Named animations of the die
//!
//! The library is assembled once at startup from the shared curves and is
//! owned by the LED facade afterwards.

use embassy_time::Duration;

use crate::animation::Animation;
use crate::curve::{CONSTANT_OFF, CONSTANT_ON, Curve, ON_128_OFF_128, RAMP_UP_DOWN};
use crate::layout::FaceLayout;

const ANIMATION_NAME_FACE_ONE_SLOW_PULSE: &str = "face_one_slow_pulse";
const ANIMATION_NAME_FACE_TWO_SLOW_PULSE: &str = "face_two_slow_pulse";
const ANIMATION_NAME_FACE_THREE_SLOW_PULSE: &str = "face_three_slow_pulse";
const ANIMATION_NAME_FACE_FOUR_SLOW_PULSE: &str = "face_four_slow_pulse";
const ANIMATION_NAME_FACE_FIVE_SLOW_PULSE: &str = "face_five_slow_pulse";
const ANIMATION_NAME_FACE_SIX_SLOW_PULSE: &str = "face_six_slow_pulse";
const ANIMATION_NAME_ALL_FACES_PULSE: &str = "all_faces_pulse";
const ANIMATION_NAME_CASCADE: &str = "cascade";
const ANIMATION_NAME_BLINK_ALL: &str = "blink_all";
const ANIMATION_NAME_ALL_ON: &str = "all_on";
const ANIMATION_NAME_ALL_OFF: &str = "all_off";

const ANIMATION_ID_FACE_ONE_SLOW_PULSE: u8 = 0;
const ANIMATION_ID_FACE_TWO_SLOW_PULSE: u8 = 1;
const ANIMATION_ID_FACE_THREE_SLOW_PULSE: u8 = 2;
const ANIMATION_ID_FACE_FOUR_SLOW_PULSE: u8 = 3;
const ANIMATION_ID_FACE_FIVE_SLOW_PULSE: u8 = 4;
const ANIMATION_ID_FACE_SIX_SLOW_PULSE: u8 = 5;
const ANIMATION_ID_ALL_FACES_PULSE: u8 = 6;
const ANIMATION_ID_CASCADE: u8 = 7;
const ANIMATION_ID_BLINK_ALL: u8 = 8;
const ANIMATION_ID_ALL_ON: u8 = 9;
const ANIMATION_ID_ALL_OFF: u8 = 10;

const NO_DELAY: Duration = Duration::from_millis(0);
const SLOW_PULSE: Duration = Duration::from_millis(3000);
const CASCADE_STEP: Duration = Duration::from_millis(250);
const CASCADE_PULSE: Duration = Duration::from_millis(1000);
const BLINK_PERIOD: Duration = Duration::from_millis(1000);
const SOLID_HOLD: Duration = Duration::from_millis(1000);
const OFF_HOLD: Duration = Duration::from_millis(1);

/// Known animation ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    FaceOneSlowPulse = ANIMATION_ID_FACE_ONE_SLOW_PULSE,
    FaceTwoSlowPulse = ANIMATION_ID_FACE_TWO_SLOW_PULSE,
    FaceThreeSlowPulse = ANIMATION_ID_FACE_THREE_SLOW_PULSE,
    FaceFourSlowPulse = ANIMATION_ID_FACE_FOUR_SLOW_PULSE,
    FaceFiveSlowPulse = ANIMATION_ID_FACE_FIVE_SLOW_PULSE,
    FaceSixSlowPulse = ANIMATION_ID_FACE_SIX_SLOW_PULSE,
    AllFacesPulse = ANIMATION_ID_ALL_FACES_PULSE,
    Cascade = ANIMATION_ID_CASCADE,
    BlinkAll = ANIMATION_ID_BLINK_ALL,
    AllOn = ANIMATION_ID_ALL_ON,
    AllOff = ANIMATION_ID_ALL_OFF,
}

impl AnimationId {
    /// Number of known animations
    pub const COUNT: usize = 11;

    pub const ALL: [Self; Self::COUNT] = [
        Self::FaceOneSlowPulse,
        Self::FaceTwoSlowPulse,
        Self::FaceThreeSlowPulse,
        Self::FaceFourSlowPulse,
        Self::FaceFiveSlowPulse,
        Self::FaceSixSlowPulse,
        Self::AllFacesPulse,
        Self::Cascade,
        Self::BlinkAll,
        Self::AllOn,
        Self::AllOff,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_FACE_ONE_SLOW_PULSE => Self::FaceOneSlowPulse,
            ANIMATION_ID_FACE_TWO_SLOW_PULSE => Self::FaceTwoSlowPulse,
            ANIMATION_ID_FACE_THREE_SLOW_PULSE => Self::FaceThreeSlowPulse,
            ANIMATION_ID_FACE_FOUR_SLOW_PULSE => Self::FaceFourSlowPulse,
            ANIMATION_ID_FACE_FIVE_SLOW_PULSE => Self::FaceFiveSlowPulse,
            ANIMATION_ID_FACE_SIX_SLOW_PULSE => Self::FaceSixSlowPulse,
            ANIMATION_ID_ALL_FACES_PULSE => Self::AllFacesPulse,
            ANIMATION_ID_CASCADE => Self::Cascade,
            ANIMATION_ID_BLINK_ALL => Self::BlinkAll,
            ANIMATION_ID_ALL_ON => Self::AllOn,
            ANIMATION_ID_ALL_OFF => Self::AllOff,
            _ => return None,
        })
    }

    /// Slow pulse of every pip on `face` (zero based)
    pub fn face_pulse(face: u8) -> Option<Self> {
        Self::from_raw(face).filter(|_| face < FaceLayout::DIE.faces())
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FaceOneSlowPulse => ANIMATION_NAME_FACE_ONE_SLOW_PULSE,
            Self::FaceTwoSlowPulse => ANIMATION_NAME_FACE_TWO_SLOW_PULSE,
            Self::FaceThreeSlowPulse => ANIMATION_NAME_FACE_THREE_SLOW_PULSE,
            Self::FaceFourSlowPulse => ANIMATION_NAME_FACE_FOUR_SLOW_PULSE,
            Self::FaceFiveSlowPulse => ANIMATION_NAME_FACE_FIVE_SLOW_PULSE,
            Self::FaceSixSlowPulse => ANIMATION_NAME_FACE_SIX_SLOW_PULSE,
            Self::AllFacesPulse => ANIMATION_NAME_ALL_FACES_PULSE,
            Self::Cascade => ANIMATION_NAME_CASCADE,
            Self::BlinkAll => ANIMATION_NAME_BLINK_ALL,
            Self::AllOn => ANIMATION_NAME_ALL_ON,
            Self::AllOff => ANIMATION_NAME_ALL_OFF,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

/// Registry of named animations
#[derive(Debug, Clone)]
pub struct AnimationLibrary<'a> {
    animations: [Animation<'a>; AnimationId::COUNT],
}

impl Default for AnimationLibrary<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> AnimationLibrary<'a> {
    /// Library where every animation is empty
    pub fn new() -> Self {
        Self {
            animations: core::array::from_fn(|_| Animation::new()),
        }
    }

    /// Replace the animation registered under `id`
    #[must_use]
    pub fn with(mut self, id: AnimationId, animation: Animation<'a>) -> Self {
        self.animations[id.slot()] = animation;
        self
    }

    pub fn get(&self, id: AnimationId) -> &Animation<'a> {
        &self.animations[id.slot()]
    }

    pub fn get_mut(&mut self, id: AnimationId) -> &mut Animation<'a> {
        &mut self.animations[id.slot()]
    }

    /// Registered animations with their ids
    pub fn iter(&self) -> impl Iterator<Item = (AnimationId, &Animation<'a>)> {
        AnimationId::ALL.into_iter().zip(self.animations.iter())
    }

    /// Stop every animation without clearing its LEDs
    pub fn stop_all(&mut self) {
        for animation in &mut self.animations {
            animation.stop();
        }
    }
}

impl AnimationLibrary<'static> {
    /// The built-in animations of the die
    pub fn die() -> Self {
        let mut library = Self::new();
        for face in 0..FaceLayout::DIE.faces() {
            if let Some(id) = AnimationId::face_pulse(face) {
                let pulse = on_face(Animation::new(), face, NO_DELAY, SLOW_PULSE, &RAMP_UP_DOWN);
                library = library.with(id, pulse);
            }
        }

        library
            .with(
                AnimationId::AllFacesPulse,
                on_every_face(SLOW_PULSE, &RAMP_UP_DOWN),
            )
            .with(AnimationId::Cascade, cascade())
            .with(
                AnimationId::BlinkAll,
                on_every_face(BLINK_PERIOD, &ON_128_OFF_128),
            )
            .with(AnimationId::AllOn, on_every_face(SOLID_HOLD, &CONSTANT_ON))
            .with(AnimationId::AllOff, on_every_face(OFF_HOLD, &CONSTANT_OFF))
    }
}

/// Append one track per pip of `face`
fn on_face<'a>(
    animation: Animation<'a>,
    face: u8,
    start_delay: Duration,
    duration: Duration,
    curve: &'a Curve,
) -> Animation<'a> {
    (0..FaceLayout::DIE.leds_on_face(face)).fold(animation, |animation, led| {
        animation.with_track(face, led, start_delay, duration, curve)
    })
}

fn on_every_face(duration: Duration, curve: &Curve) -> Animation<'_> {
    (0..FaceLayout::DIE.faces()).fold(Animation::new(), |animation, face| {
        on_face(animation, face, NO_DELAY, duration, curve)
    })
}

/// Faces light up one after another
fn cascade() -> Animation<'static> {
    (0..FaceLayout::DIE.faces()).fold(Animation::new(), |animation, face| {
        let delay = CASCADE_STEP * u32::from(face);
        on_face(animation, face, delay, CASCADE_PULSE, &RAMP_UP_DOWN)
    })
}
