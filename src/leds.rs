use core::fmt;

use embassy_time::Instant;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::LedBackend;
use crate::color::{BLACK, Rgb};
use crate::layout::{LED_COUNT, led_index};
use crate::library::{AnimationId, AnimationLibrary};
use crate::playback::{PlaybackReceiver, PlaybackRequest};
use crate::queue::{LedWrite, UpdateQueue};

/// Lifecycle of the LED facade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedsState {
    /// Created, hardware untouched
    Uninitialized,
    /// Hardware cleared and ready, no cycle run yet
    Initialized,
    /// At least one update cycle has run
    Running,
    /// Output halted until the next `init`
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError<E> {
    /// The backend failed to push pixels to the hardware
    Backend(E),
    /// The operation needs an initialized, not stopped facade
    NotReady(LedsState),
}

impl<E: fmt::Debug> fmt::Display for LedError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend(err) => write!(f, "LED backend error: {:?}", err),
            Self::NotReady(state) => write!(f, "LEDs are not ready ({:?})", state),
        }
    }
}

/// LED facade - the per-cycle orchestrator
///
/// Offers two write paths with the same effect but different timing:
/// `*_now` methods write and flush the backend immediately, the others are
/// queued and reach the hardware in one batch during [`Leds::update`].
pub struct Leds<'a, B: LedBackend, const REQUESTS: usize> {
    // External dependencies
    backend: B,
    requests: PlaybackReceiver<'a, REQUESTS>,

    // Internal state
    state: LedsState,
    library: AnimationLibrary<'a>,
    playing: Vec<AnimationId, { AnimationId::COUNT }>,
    queue: UpdateQueue,
}

impl<'a, B: LedBackend, const REQUESTS: usize> Leds<'a, B, REQUESTS> {
    /// Create the facade over a backend driving every die LED
    ///
    /// # Panics
    ///
    /// Panics if the backend does not drive exactly [`LED_COUNT`] LEDs. The
    /// queue and the animations address the whole die.
    pub fn new(
        backend: B,
        library: AnimationLibrary<'a>,
        requests: PlaybackReceiver<'a, REQUESTS>,
    ) -> Self {
        assert_eq!(
            backend.led_count(),
            LED_COUNT,
            "LED backend must drive every die LED"
        );
        Self {
            backend,
            requests,
            state: LedsState::Uninitialized,
            library,
            playing: Vec::new(),
            queue: UpdateQueue::new(),
        }
    }

    /// Clear the hardware and get ready for update cycles
    ///
    /// Also the way back out of [`LedsState::Stopped`].
    pub fn init(&mut self) -> Result<(), LedError<B::Error>> {
        #[cfg(feature = "esp32-log")]
        println!("[Leds.init] {} LEDs", self.backend.led_count());
        self.reset_playback();
        self.backend.clear();
        self.backend.flush().map_err(LedError::Backend)?;
        self.state = LedsState::Initialized;
        Ok(())
    }

    /// Run one cycle
    ///
    /// Applies pending playback requests, samples every playing animation
    /// into the queue, then pushes the queue to the backend in one flush.
    /// Returns the number of LED writes sent to the hardware.
    pub fn update(&mut self, now: Instant) -> Result<usize, LedError<B::Error>> {
        self.ensure_ready()?;
        self.state = LedsState::Running;

        self.process_requests(now);
        for &id in &self.playing {
            self.library.get(id).render_into(now, &mut self.queue);
        }

        self.flush_queue()
    }

    /// Halt all output and switch every LED off
    pub fn stop(&mut self) -> Result<(), LedError<B::Error>> {
        #[cfg(feature = "esp32-log")]
        println!("[Leds.stop] halting output");
        self.reset_playback();
        self.state = LedsState::Stopped;
        self.backend.clear();
        self.backend.flush().map_err(LedError::Backend)
    }

    /// Start (or restart) an animation at `now`
    ///
    /// A restarted animation moves to the end of the evaluation order, so
    /// it wins over other animations writing the same LEDs.
    pub fn play(&mut self, id: AnimationId, now: Instant) -> Result<(), LedError<B::Error>> {
        self.ensure_ready()?;
        self.start_animation(id, now);
        Ok(())
    }

    /// Stop an animation, optionally queuing black for its LEDs
    ///
    /// Leaving `clear` unset keeps the LEDs at their last written colors.
    pub fn stop_animation(&mut self, id: AnimationId, clear: bool) {
        #[cfg(feature = "esp32-log")]
        println!("[Leds.stop_animation] {} (clear: {})", id.as_str(), clear);
        self.playing.retain(|&playing| playing != id);
        let animation = self.library.get_mut(id);
        if clear {
            animation.stop_and_clear(&mut self.queue);
        } else {
            animation.stop();
        }
    }

    pub fn is_playing(&self, id: AnimationId) -> bool {
        self.playing.contains(&id)
    }

    /// Whether a playing animation has run all of its tracks
    pub fn is_done(&self, id: AnimationId, now: Instant) -> bool {
        self.library.get(id).is_done(now)
    }

    /// Playing animations in evaluation order
    pub fn playing(&self) -> &[AnimationId] {
        &self.playing
    }

    pub const fn state(&self) -> LedsState {
        self.state
    }

    pub fn library(&self) -> &AnimationLibrary<'a> {
        &self.library
    }

    /// Writes waiting for the next update
    pub fn pending(&self) -> &UpdateQueue {
        &self.queue
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    // Immediate writes

    pub fn set_led_now(&mut self, face: u8, led: u8, color: Rgb) -> Result<(), LedError<B::Error>> {
        self.set_led_at_now(led_index(face, led), color)
    }

    pub fn set_led_at_now(&mut self, index: usize, color: Rgb) -> Result<(), LedError<B::Error>> {
        self.ensure_ready()?;
        self.backend.set_pixel(index, color);
        self.backend.flush().map_err(LedError::Backend)
    }

    pub fn set_leds_now(&mut self, writes: &[LedWrite]) -> Result<(), LedError<B::Error>> {
        self.ensure_ready()?;
        for write in writes {
            self.backend.set_pixel(write.index, write.color);
        }
        self.backend.flush().map_err(LedError::Backend)
    }

    pub fn set_all_now(&mut self, color: Rgb) -> Result<(), LedError<B::Error>> {
        self.ensure_ready()?;
        for index in 0..self.backend.led_count() {
            self.backend.set_pixel(index, color);
        }
        self.backend.flush().map_err(LedError::Backend)
    }

    pub fn clear_all_now(&mut self) -> Result<(), LedError<B::Error>> {
        self.ensure_ready()?;
        self.backend.clear();
        self.backend.flush().map_err(LedError::Backend)
    }

    // Queued writes

    pub fn set_led(&mut self, face: u8, led: u8, color: Rgb) -> Result<(), LedError<B::Error>> {
        self.set_led_at(led_index(face, led), color)
    }

    pub fn set_led_at(&mut self, index: usize, color: Rgb) -> Result<(), LedError<B::Error>> {
        self.ensure_ready()?;
        self.queue.enqueue(index, color);
        Ok(())
    }

    pub fn set_leds(&mut self, writes: &[LedWrite]) -> Result<(), LedError<B::Error>> {
        self.ensure_ready()?;
        for write in writes {
            self.queue.enqueue(write.index, write.color);
        }
        Ok(())
    }

    pub fn set_all(&mut self, color: Rgb) -> Result<(), LedError<B::Error>> {
        self.ensure_ready()?;
        self.queue.enqueue_all(color);
        Ok(())
    }

    pub fn clear_all(&mut self) -> Result<(), LedError<B::Error>> {
        self.set_all(BLACK)
    }

    fn ensure_ready(&self) -> Result<(), LedError<B::Error>> {
        match self.state {
            LedsState::Initialized | LedsState::Running => Ok(()),
            state => Err(LedError::NotReady(state)),
        }
    }

    /// Apply requests posted since the last cycle
    fn process_requests(&mut self, now: Instant) {
        while let Some(request) = self.requests.try_receive() {
            match request {
                PlaybackRequest::Play(id) => self.start_animation(id, now),
                PlaybackRequest::Stop(id) => self.stop_animation(id, true),
                PlaybackRequest::StopAll => {
                    for &id in &self.playing {
                        self.library.get_mut(id).stop_and_clear(&mut self.queue);
                    }
                    self.playing.clear();
                }
            }
        }
    }

    /// Push pending writes to the backend
    ///
    /// The queue is only cleared once the backend accepted the flush, so a
    /// failed cycle is retried on the next update.
    fn flush_queue(&mut self) -> Result<usize, LedError<B::Error>> {
        if self.queue.is_empty() {
            return Ok(0);
        }
        for write in self.queue.iter() {
            self.backend.set_pixel(write.index, write.color);
        }
        if let Err(err) = self.backend.flush() {
            #[cfg(feature = "esp32-log")]
            println!("[Leds.flush_queue] backend flush failed");
            return Err(LedError::Backend(err));
        }
        let count = self.queue.len();
        self.queue.clear();
        Ok(count)
    }

    fn start_animation(&mut self, id: AnimationId, now: Instant) {
        #[cfg(feature = "esp32-log")]
        println!("[Leds.play] {}", id.as_str());
        self.playing.retain(|&playing| playing != id);
        // One entry per id, so there is always room
        let _ = self.playing.push(id);
        self.library.get_mut(id).start(now);
    }

    fn reset_playback(&mut self) {
        self.library.stop_all();
        self.playing.clear();
        self.queue.clear();
    }
}
