//! Update cycle pacing
//!
//! Drives [`Leds::update`] at a fixed rate without async/await or
//! platform-specific timers. The caller sleeps between ticks.

use embassy_time::{Duration, Instant};

use crate::LedBackend;
use crate::leds::{LedError, Leds};

/// Default update rate (30 Hz).
pub const DEFAULT_TICK_HZ: u64 = 30;

/// Default tick interval based on the update rate.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000 / DEFAULT_TICK_HZ);

/// Timing of the next cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// LED writes flushed during this tick
    pub writes: usize,
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Fixed-rate driver for the LED facade
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = TickScheduler::new(leds);
/// scheduler.leds_mut().init()?;
///
/// loop {
///     let result = scheduler.tick(Instant::now())?;
///     Timer::after(result.sleep_duration).await;
/// }
/// ```
pub struct TickScheduler<'a, B: LedBackend, const REQUESTS: usize> {
    leds: Leds<'a, B, REQUESTS>,
    next_tick: Option<Instant>,
    interval: Duration,
}

impl<'a, B: LedBackend, const REQUESTS: usize> TickScheduler<'a, B, REQUESTS> {
    /// Create a scheduler ticking at [`DEFAULT_TICK_INTERVAL`]
    pub fn new(leds: Leds<'a, B, REQUESTS>) -> Self {
        Self::with_interval(leds, DEFAULT_TICK_INTERVAL)
    }

    pub fn with_interval(leds: Leds<'a, B, REQUESTS>, interval: Duration) -> Self {
        Self {
            leds,
            next_tick: None,
            interval,
        }
    }

    /// Run one update cycle and return when the next one is due.
    ///
    /// If the caller fell more than two intervals behind, the schedule
    /// restarts from `now` instead of bursting through the backlog.
    pub fn tick(&mut self, now: Instant) -> Result<TickResult, LedError<B::Error>> {
        let max_drift = self.interval * 2;
        let scheduled = match self.next_tick {
            Some(next) if now <= next + max_drift => next,
            _ => now,
        };

        let writes = self.leds.update(now)?;

        let next_deadline = scheduled + self.interval;
        self.next_tick = Some(next_deadline);

        let sleep_duration = next_deadline
            .checked_duration_since(now)
            .unwrap_or(Duration::from_ticks(0));

        Ok(TickResult {
            writes,
            next_deadline,
            sleep_duration,
        })
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    pub fn leds(&self) -> &Leds<'a, B, REQUESTS> {
        &self.leds
    }

    pub fn leds_mut(&mut self) -> &mut Leds<'a, B, REQUESTS> {
        &mut self.leds
    }

    pub fn into_leds(self) -> Leds<'a, B, REQUESTS> {
        self.leds
    }
}
