use std::time::{Duration, Instant};

/// Paces reconnect attempts after a serial failure: the retry window
/// doubles on every failure up to a ceiling and snaps back on success.
pub struct Backoff {
    initial: Duration,
    max: Duration,
    current: Duration,
    next_attempt_at: Instant,
}

impl Backoff {
    pub fn new(initial_ms: u64, max_ms: u64) -> Self {
        let initial = Duration::from_millis(initial_ms.max(1));
        let max = Duration::from_millis(max_ms.max(initial_ms.max(1)));
        Self {
            initial,
            max,
            current: initial,
            next_attempt_at: Instant::now(),
        }
    }

    pub fn mark_failure(&mut self, now: Instant) {
        self.next_attempt_at = now + self.current;
        self.current = (self.current * 2).min(self.max);
    }

    pub fn mark_success(&mut self, now: Instant) {
        self.current = self.initial;
        self.next_attempt_at = now;
    }

    pub fn ready(&self, now: Instant) -> bool {
        now >= self.next_attempt_at
    }
}
