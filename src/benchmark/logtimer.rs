use std::time::{
    Duration,
    Instant
};

pub const DEFAULT_LOG_INTERVAL: Duration = Duration::from_secs(10);

/// Tells whether at least `interval` has passed since it last said so.
pub struct LogTimer {
    last: Instant,
    interval: Duration
}

impl LogTimer {
    pub fn new(interval: Duration) -> LogTimer {
        LogTimer { last: Instant::now(), interval }
    }

    pub fn update(&mut self) -> bool {
        let now = Instant::now();
        if now.duration_since(self.last) >= self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }
}

impl Default for LogTimer {
    fn default() -> Self {
        LogTimer::new(DEFAULT_LOG_INTERVAL)
    }
}
