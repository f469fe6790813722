//! State shared between the control thread and the bench threads
//!
//! Plain atomics: the encoder thread only increments, the control thread
//! loads and resets, and the shutdown flag is raised once.

use std::sync::atomic::AtomicBool;

use katharos_core::traits::TickCounter;

/// Chuck encoder edges since the last reset
pub static ENCODER_TICKS: TickCounter = TickCounter::new();

/// Raised to stop the tick loop and the bench threads
pub static SHUTDOWN: AtomicBool = AtomicBool::new(false);
