//! Clocks and the search deadline.
//!
//! The deadline is passed explicitly through every search call; there is no
//! global clock. Production code uses `MonotonicClock`. `TickClock` advances a
//! fixed amount each time it is sampled, which makes deadline expiry
//! reproducible in tests.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of elapsed time since the start of a search.
pub trait Clock {
    /// Time elapsed since this clock was started.
    fn elapsed(&self) -> Duration;
}

/// Wall clock backed by `Instant`.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    /// Start a clock now.
    #[must_use]
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }
}

impl Clock for MonotonicClock {
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Fake clock that advances by `tick` on every sample.
///
/// The first sample reads `tick`, the second `2 * tick`, and so on.
#[derive(Debug)]
pub struct TickClock {
    tick: Duration,
    samples: Cell<u32>,
}

impl TickClock {
    /// Create a clock advancing by `tick` per sample.
    #[must_use]
    pub fn new(tick: Duration) -> Self {
        Self {
            tick,
            samples: Cell::new(0),
        }
    }

    /// Number of times the clock has been sampled.
    #[must_use]
    pub fn samples(&self) -> u32 {
        self.samples.get()
    }
}

impl Clock for TickClock {
    fn elapsed(&self) -> Duration {
        let n = self.samples.get() + 1;
        self.samples.set(n);
        self.tick * n
    }
}

/// A time budget measured on a clock.
#[derive(Clone, Copy)]
pub struct Deadline<'c> {
    clock: &'c dyn Clock,
    budget: Duration,
}

impl<'c> Deadline<'c> {
    /// Create a deadline `budget` after the clock's start.
    pub fn new(clock: &'c dyn Clock, budget: Duration) -> Self {
        Self { clock, budget }
    }

    /// Check if more than `budget` has elapsed.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.clock.elapsed() > self.budget
    }

    /// Time elapsed on the underlying clock.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }
}

impl std::fmt::Debug for Deadline<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deadline").field("budget", &self.budget).finish()
    }
}
