//! Injectable clock

/// Monotonic time plus blocking sleep
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> u64;

    /// Block the control thread for `ms` milliseconds
    fn sleep_ms(&mut self, ms: u32);
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }

    fn sleep_ms(&mut self, ms: u32) {
        (**self).sleep_ms(ms)
    }
}

/// Wall-clock budget measured from a start instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    start_ms: u64,
    budget_ms: u32,
}

impl Deadline {
    /// Start a budget now
    pub fn start(clock: &impl Clock, budget_ms: u32) -> Self {
        Self {
            start_ms: clock.now_ms(),
            budget_ms,
        }
    }

    /// Time spent since the start
    pub fn elapsed_ms(&self, clock: &impl Clock) -> u64 {
        clock.now_ms().saturating_sub(self.start_ms)
    }

    /// Check if the budget is used up
    pub fn expired(&self, clock: &impl Clock) -> bool {
        self.elapsed_ms(clock) >= u64::from(self.budget_ms)
    }
}
