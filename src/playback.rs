//! Playback requests from other contexts
//!
//! Code that decides what to show (a motion interrupt, a BLE handler) posts
//! requests into a [`PlaybackChannel`]. The LED facade drains the channel at
//! the start of every update, so a request takes effect in the next cycle.
//! Synchronization uses `critical-section`, making the channel safe to post
//! into from interrupt handlers.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::library::AnimationId;

/// A change to the set of playing animations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackRequest {
    /// Start (or restart) an animation at the time of the next update
    Play(AnimationId),
    /// Stop an animation and switch off its LEDs
    Stop(AnimationId),
    /// Stop every animation and switch off all LEDs
    StopAll,
}

/// Error returned when the channel has no room for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub PlaybackRequest);

/// Bounded queue of playback requests
pub struct PlaybackChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<PlaybackRequest, SIZE>>>,
}

impl<const SIZE: usize> PlaybackChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> PlaybackSender<'_, SIZE> {
        PlaybackSender { channel: self }
    }

    /// The facade side of the channel
    pub const fn receiver(&self) -> PlaybackReceiver<'_, SIZE> {
        PlaybackReceiver { channel: self }
    }

    /// Post a request
    ///
    /// `StopAll` supersedes everything still pending, so it is accepted even
    /// when the channel is full.
    pub fn try_send(&self, request: PlaybackRequest) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            if request == PlaybackRequest::StopAll {
                queue.clear();
            }
            queue.push_back(request).map_err(TrySendError)
        })
    }

    pub fn try_receive(&self) -> Option<PlaybackRequest> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for PlaybackChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct PlaybackSender<'a, const SIZE: usize> {
    channel: &'a PlaybackChannel<SIZE>,
}

impl<const SIZE: usize> PlaybackSender<'_, SIZE> {
    pub fn play(&self, id: AnimationId) -> Result<(), TrySendError> {
        self.channel.try_send(PlaybackRequest::Play(id))
    }

    pub fn stop(&self, id: AnimationId) -> Result<(), TrySendError> {
        self.channel.try_send(PlaybackRequest::Stop(id))
    }

    pub fn stop_all(&self) -> Result<(), TrySendError> {
        self.channel.try_send(PlaybackRequest::StopAll)
    }
}

#[derive(Clone, Copy)]
pub struct PlaybackReceiver<'a, const SIZE: usize> {
    channel: &'a PlaybackChannel<SIZE>,
}

impl<const SIZE: usize> PlaybackReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Option<PlaybackRequest> {
        self.channel.try_receive()
    }
}
