//! Rate-limiting gates.
//!
//! These are clock-agnostic: callers pass `now` in, so the same types drive
//! the browser wrappers (via `performance.now()`) and host tests.

use crate::time::{Duration, Instant};

/// Leading-edge throttle: the first call passes, later calls are dropped
/// until `limit` has elapsed since the last call that passed.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit: Duration,
    reopens_at: Option<Instant>,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            reopens_at: None,
        }
    }

    pub fn from_millis(ms: u32) -> Self {
        Self::new(Duration::from_millis(ms as u64))
    }

    pub fn try_pass(&mut self, now: Instant) -> bool {
        if let Some(t) = self.reopens_at {
            if now < t {
                return false;
            }
        }
        self.reopens_at = Some(now + self.limit);
        true
    }
}

/// Trailing-edge debounce holding the most recent argument.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    pub fn from_millis(ms: u32) -> Self {
        Self::new(Duration::from_millis(ms as u64))
    }

    /// Records a call and pushes the deadline out; returns the new deadline.
    pub fn poke(&mut self, now: Instant, value: T) -> Instant {
        self.pending = Some(value);
        now + self.wait
    }

    /// Hands out the pending value when the single outstanding timer fires.
    /// The timer was armed for the latest deadline, so no clock check is made.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take()
    }
}

/// At most one commit per animation frame: high-frequency signals request a
/// frame, and only the first request since the last commit schedules one.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameGate {
    scheduled: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the caller must schedule a frame.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.scheduled, true)
    }

    /// Called at the start of the frame callback.
    pub fn begin_commit(&mut self) {
        self.scheduled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn throttle_passes_leading_call_then_waits() {
        let t0 = Instant::now();
        let mut t = Throttle::from_millis(100);
        assert!(t.try_pass(t0));
        assert!(!t.try_pass(t0 + ms(10)));
        assert!(!t.try_pass(t0 + ms(99)));
        assert!(t.try_pass(t0 + ms(100)));
        assert!(!t.try_pass(t0 + ms(150)));
    }

    #[test]
    fn debounce_keeps_latest_value_and_pushes_deadline() {
        let t0 = Instant::now();
        let mut d = Debouncer::from_millis(50);
        assert_eq!(d.poke(t0, 1), t0 + ms(50));
        assert_eq!(d.poke(t0 + ms(30), 2), t0 + ms(80));
        assert_eq!(d.flush(), Some(2));
        assert_eq!(d.flush(), None);
    }

    #[test]
    fn frame_gate_coalesces_requests() {
        let mut g = FrameGate::new();
        assert!(g.request());
        assert!(!g.request());
        assert!(!g.request());
        g.begin_commit();
        assert!(g.request());
    }
}
