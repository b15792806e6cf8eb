//! Timed offset scrolling
//!
//! Scrolling color modes read a segment set's offset counter. The ticker
//! is the explicit state of whoever owns that "moving background": call
//! [`OffsetTicker::update`] every loop and it steps the counter once per
//! elapsed period.

use embassy_time::{Duration, Instant};

use crate::segment::{Direction, SegmentSet};

/// Default period between offset steps
pub const DEFAULT_OFFSET_RATE: Duration = Duration::from_millis(80);

/// Steps a segment set's offset counter at a fixed rate
#[derive(Debug, Clone)]
pub struct OffsetTicker {
    rate: Duration,
    step: u16,
    direction: Direction,
    next_step: Option<Instant>,
}

impl Default for OffsetTicker {
    fn default() -> Self {
        Self::new(DEFAULT_OFFSET_RATE)
    }
}

impl OffsetTicker {
    /// Create a ticker advancing by one step every `rate`
    pub const fn new(rate: Duration) -> Self {
        Self {
            rate,
            step: 1,
            direction: Direction::Forward,
            next_step: None,
        }
    }

    /// Set how far the offset moves per period
    #[must_use]
    pub const fn with_step(mut self, step: u16) -> Self {
        self.step = step;
        self
    }

    /// Set whether the offset advances or retreats
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub const fn rate(&self) -> Duration {
        self.rate
    }

    pub const fn set_rate(&mut self, rate: Duration) {
        self.rate = rate;
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Reverse the scrolling direction
    pub const fn flip_direction(&mut self) {
        self.direction = self.direction.flipped();
    }

    /// Restart timing, the next update steps immediately
    pub const fn reset(&mut self) {
        self.next_step = None;
    }

    /// Step the set's offset if the period has elapsed
    ///
    /// Returns `true` if the offset changed. Falling more than two periods
    /// behind drops the backlog instead of stepping in a burst.
    pub fn update<const MAX_SEGMENTS: usize>(
        &mut self,
        now: Instant,
        set: &mut SegmentSet<'_, MAX_SEGMENTS>,
    ) -> bool {
        let next = match self.next_step {
            Some(next) if now < next => return false,
            Some(next) => next,
            None => now,
        };

        let max_drift = self.rate * 2;
        let next = if now > next + max_drift { now } else { next };

        match self.direction {
            Direction::Forward => set.advance_offset(self.step),
            Direction::Reversed => set.retreat_offset(self.step),
        }
        self.next_step = Some(next + self.rate);
        true
    }
}
