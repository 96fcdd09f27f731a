//! Logical timers for a round.
//!
//! The controller owns one `RoundClock`. Hosts push wall time into it via
//! `RoundController::advance`; the clock hands back due timers one at a time
//! in chronological order:
//! - periodic ticks, only while started
//! - one-shot mismatch flip-backs
//!
//! Stopping the clock discards the next tick, so no tick is delivered after a
//! round ends.

use std::time::Duration;

use super::event::FlipBackToken;

/// A timer that came due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timer {
    Tick,
    FlipBack(FlipBackToken),
}

#[derive(Clone, Copy, Debug)]
struct PendingFlipBack {
    due: Duration,
    token: FlipBackToken,
}

/// Tick and flip-back scheduler on a logical time line.
#[derive(Clone, Debug)]
pub struct RoundClock {
    now: Duration,
    tick_interval: Duration,
    next_tick: Option<Duration>,
    pending: Vec<PendingFlipBack>,
}

impl RoundClock {
    /// Create a stopped clock at time zero.
    ///
    /// `tick_interval` must be non-zero.
    #[must_use]
    pub fn new(tick_interval: Duration) -> Self {
        debug_assert!(!tick_interval.is_zero(), "tick interval must be non-zero");
        Self {
            now: Duration::ZERO,
            tick_interval,
            next_tick: None,
            pending: Vec::new(),
        }
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Start ticking; the first tick is one interval from now.
    pub fn start(&mut self) {
        self.next_tick = Some(self.now + self.tick_interval);
    }

    /// Stop ticking.
    pub fn stop(&mut self) {
        self.next_tick = None;
    }

    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Schedule a flip-back `delay` from now.
    pub fn schedule(&mut self, token: FlipBackToken, delay: Duration) {
        self.pending.push(PendingFlipBack {
            due: self.now + delay,
            token,
        });
    }

    /// Drop every pending flip-back.
    pub fn cancel_flip_backs(&mut self) {
        self.pending.clear();
    }

    /// Number of scheduled flip-backs.
    #[must_use]
    pub fn pending_flip_backs(&self) -> usize {
        self.pending.len()
    }

    /// Pop the earliest timer due at or before `until`, moving `now` to it.
    ///
    /// Flip-backs win ties with ticks.
    pub fn pop_due(&mut self, until: Duration) -> Option<Timer> {
        let earliest = self
            .pending
            .iter()
            .enumerate()
            .min_by_key(|(_, p)| p.due)
            .map(|(idx, p)| (idx, p.due));

        let flip_due = earliest.filter(|&(_, due)| due <= until);
        let tick_due = self.next_tick.filter(|&due| due <= until);

        match (flip_due, tick_due) {
            (Some((idx, due)), Some(tick)) if due <= tick => Some(self.take_flip_back(idx, due)),
            (Some((idx, due)), None) => Some(self.take_flip_back(idx, due)),
            (_, Some(tick)) => {
                self.now = tick;
                self.next_tick = Some(tick + self.tick_interval);
                Some(Timer::Tick)
            }
            (None, None) => None,
        }
    }

    /// Move `now` forward to `until` once all due timers are popped.
    pub fn advance_to(&mut self, until: Duration) {
        if until > self.now {
            self.now = until;
        }
    }

    fn take_flip_back(&mut self, idx: usize, due: Duration) -> Timer {
        self.now = due;
        let pending = self.pending.remove(idx);
        Timer::FlipBack(pending.token)
    }
}
