//! Rate limiting for repeated log messages.
//!
//! The correction sanitizer can fire on every filter update when the
//! scale state is stuck negative; warning once per period keeps the log
//! readable without dropping the signal entirely.

use std::time::{Duration, Instant};

/// Allows an action through at most once per period.
#[derive(Debug, Clone)]
pub struct Throttle {
    period: Duration,
    last: Option<Instant>,
}

impl Throttle {
    /// Create a throttle with the given minimum period between firings.
    pub fn new(period: Duration) -> Self {
        Self { period, last: None }
    }

    /// One-second throttle, the conventional period for repeated warnings.
    pub fn per_second() -> Self {
        Self::new(Duration::from_secs(1))
    }

    /// Returns true if the action may fire now, and if so starts a new
    /// period. The first call always fires.
    pub fn ready(&mut self) -> bool {
        let now = Instant::now();
        match self.last {
            Some(last) if now.duration_since(last) < self.period => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}
