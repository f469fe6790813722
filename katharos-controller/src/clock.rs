//! Wall clock for the control thread

use std::time::{Duration, Instant};

use katharos_core::scheduler::Clock;
use spin_sleep::SpinSleeper;

/// Monotonic milliseconds since construction
///
/// Sleeps go through a spin sleeper so the 10 ms grip sampling interval
/// does not drift with OS timer slack.
pub struct SystemClock {
    origin: Instant,
    sleeper: SpinSleeper,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            sleeper: SpinSleeper::default(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.sleeper.sleep(Duration::from_millis(u64::from(ms)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleep_advances_time() {
        let mut clock = SystemClock::new();
        let before = clock.now_ms();
        clock.sleep_ms(20);
        assert!(clock.now_ms() - before >= 20);
    }
}
