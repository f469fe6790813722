//! Stall detection over encoder samples

/// Transient record of one grip attempt
///
/// Fed one encoder count per sampling period. The first sample only
/// establishes a baseline; each following sample equal to its
/// predecessor extends the stagnant run, any change resets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampAttempt {
    start_ms: u64,
    last_tick_count: Option<u32>,
    stagnant_samples: u32,
    sensitivity: u32,
}

impl ClampAttempt {
    /// Begin an attempt at `start_ms`
    ///
    /// `sensitivity` is the number of additional stagnant samples beyond
    /// the first that must be seen before declaring a stall.
    pub fn new(start_ms: u64, sensitivity: u32) -> Self {
        Self {
            start_ms,
            last_tick_count: None,
            stagnant_samples: 0,
            sensitivity,
        }
    }

    /// Feed one encoder sample, returning true once the drive has stalled
    pub fn sample(&mut self, tick_count: u32) -> bool {
        match self.last_tick_count {
            Some(last) if last == tick_count => {
                self.stagnant_samples = self.stagnant_samples.saturating_add(1);
            }
            _ => self.stagnant_samples = 0,
        }
        self.last_tick_count = Some(tick_count);
        self.is_stalled()
    }

    /// Check if the stagnant run exceeds the sensitivity
    pub fn is_stalled(&self) -> bool {
        self.stagnant_samples > self.sensitivity
    }

    /// Length of the current stagnant run
    pub fn stagnant_samples(&self) -> u32 {
        self.stagnant_samples
    }

    /// When the attempt began (ms)
    pub fn start_ms(&self) -> u64 {
        self.start_ms
    }
}
