use std::time::{Duration, Instant};

/// Source of elapsed time since the scene was mounted.
pub trait Clock {
    fn elapsed(&self) -> Duration;
}

/// Wall clock measuring from the moment it is started (mount time).
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually advanced clock for tests and headless stepping.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    pub fn set(&mut self, to: Duration) {
        self.now = to;
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> Duration {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::start();
        let a = clock.elapsed();
        let b = clock.elapsed();
        assert!(b >= a);
    }

    #[test]
    fn manual_clock_advances_only_when_told() {
        let mut clock = ManualClock::new();
        assert_eq!(clock.elapsed(), Duration::ZERO);
        clock.advance(Duration::from_millis(16));
        clock.advance(Duration::from_millis(16));
        assert_eq!(clock.elapsed(), Duration::from_millis(32));
        clock.set(Duration::from_secs(1));
        assert_eq!(clock.elapsed(), Duration::from_secs(1));
    }
}
