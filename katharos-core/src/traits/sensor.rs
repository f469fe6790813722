//! Sensor port
//!
//! Digital inputs (start/stop buttons) plus the chuck encoder tick count.
//!
//! The encoder count is the only state shared between threads: the
//! edge callback increments it while the clamp controller samples it.
//! [`TickCounter`] keeps both sides on single atomic operations.

use core::sync::atomic::{AtomicU32, Ordering};

/// Digital inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Green start/advance button
    Start,
    /// Emergency stop
    Stop,
}

/// Sensor reads used by the cycle
pub trait SensorPort {
    /// Check if an input is asserted (pressed), polarity already resolved
    fn read_digital(&self, input: Input) -> bool;

    /// Current encoder tick count since the last reset
    fn ticks(&self) -> u32;

    /// Reset the encoder tick count to zero
    fn reset_ticks(&self);
}

/// Edge counter shared between the encoder callback and the control thread
///
/// Single writer (the edge callback), single reader (the sampling loop).
/// `reset` is only called by the reader before sampling starts.
#[derive(Debug, Default)]
pub struct TickCounter(AtomicU32);

impl TickCounter {
    /// Create a counter at zero (usable in a `static`)
    pub const fn new() -> Self {
        Self(AtomicU32::new(0))
    }

    /// Record one encoder edge
    pub fn increment(&self) {
        self.0.fetch_add(1, Ordering::AcqRel);
    }

    /// Read the current count
    pub fn load(&self) -> u32 {
        self.0.load(Ordering::Acquire)
    }

    /// Reset to zero
    pub fn reset(&self) {
        self.0.store(0, Ordering::Release);
    }
}
