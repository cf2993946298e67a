//! Concurrent track playback
//!
//! An animation is a fixed list of tracks that all run against the same
//! start time. Evaluating it produces the LED writes for the current cycle.

use core::fmt;

use embassy_time::{Duration, Instant};
use heapless::Vec;

use crate::color::{BLACK, Rgb};
use crate::curve::Curve;
use crate::queue::UpdateQueue;
use crate::track::Track;

/// Maximum number of tracks per animation
///
/// Leaves room for more than one track per LED, e.g. two back-to-back
/// pulses on every pip.
pub const MAX_TRACKS: usize = 48;

/// Returned when an animation has no room for another track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooManyTracks;

impl fmt::Display for TooManyTracks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "animation holds at most {} tracks", MAX_TRACKS)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Animation<'a> {
    tracks: Vec<Track<'a>, MAX_TRACKS>,
    start_time: Option<Instant>,
}

impl<'a> Animation<'a> {
    pub const fn new() -> Self {
        Self {
            tracks: Vec::new(),
            start_time: None,
        }
    }

    /// Add a white track for the die LED at `(face, led)`
    ///
    /// # Panics
    ///
    /// Panics if the animation is full or the LED does not exist. Both are
    /// mistakes in the animation definition.
    #[must_use]
    pub fn with_track(
        self,
        face: u8,
        led: u8,
        start_delay: Duration,
        duration: Duration,
        curve: &'a Curve,
    ) -> Self {
        self.with(Track::new(face, led, start_delay, duration, curve))
    }

    /// Add a prepared track
    ///
    /// # Panics
    ///
    /// Panics if the animation is full.
    #[must_use]
    pub fn with(mut self, track: Track<'a>) -> Self {
        if self.add_track(track).is_err() {
            panic!("animation holds at most {} tracks", MAX_TRACKS);
        }
        self
    }

    /// Append a track, keeping evaluation order
    pub fn add_track(&mut self, track: Track<'a>) -> Result<(), TooManyTracks> {
        self.tracks.push(track).map_err(|_| TooManyTracks)
    }

    pub fn tracks(&self) -> &[Track<'a>] {
        &self.tracks
    }

    /// (Re)start playback at `now`
    pub fn start(&mut self, now: Instant) {
        self.start_time = Some(now);
    }

    pub fn stop(&mut self) {
        self.start_time = None;
    }

    /// Stop playback and queue black for every LED the animation touches
    pub fn stop_and_clear<const N: usize>(&mut self, queue: &mut UpdateQueue<N>) {
        self.stop();
        for track in &self.tracks {
            queue.enqueue(track.index(), BLACK);
        }
    }

    pub const fn is_running(&self) -> bool {
        self.start_time.is_some()
    }

    pub const fn start_time(&self) -> Option<Instant> {
        self.start_time
    }

    /// Time since start, `None` when stopped or when `now` is before the start
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        now.checked_duration_since(self.start_time?)
    }

    /// Total length: the latest track end
    pub fn duration(&self) -> Duration {
        self.tracks
            .iter()
            .map(Track::end)
            .max()
            .unwrap_or(Duration::from_ticks(0))
    }

    /// Whether every track has finished at `now`
    ///
    /// Completion does not stop the animation; the caller decides whether to
    /// restart it.
    pub fn is_done(&self, now: Instant) -> bool {
        self.elapsed(now)
            .is_some_and(|elapsed| self.tracks.iter().all(|track| track.is_finished(elapsed)))
    }

    /// Queue the writes for `now`
    ///
    /// Tracks are evaluated in insertion order, so a later track overrides an
    /// earlier one on the same LED.
    pub fn render_into<const N: usize>(&self, now: Instant, queue: &mut UpdateQueue<N>) {
        let Some(elapsed) = self.elapsed(now) else {
            return;
        };
        for track in &self.tracks {
            if let Some(color) = track.color_at(elapsed) {
                queue.enqueue(track.index(), color);
            }
        }
    }

    /// Writes produced at `now`, one per LED
    pub fn update(&self, now: Instant) -> UpdateQueue {
        let mut writes = UpdateQueue::new();
        self.render_into(now, &mut writes);
        writes
    }

    /// Color the animation produces for `index` at `now`, if any
    pub fn sample_led(&self, now: Instant, index: usize) -> Option<Rgb> {
        let elapsed = self.elapsed(now)?;
        self.tracks
            .iter()
            .rev()
            .filter(|track| track.index() == index)
            .find_map(|track| track.color_at(elapsed))
    }
}
