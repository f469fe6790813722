//! Time source for the control thread
//!
//! Every wait in the cycle (settle delays, wash ticks, sampling periods,
//! tick cadence) goes through [`Clock`], so tests can run a full cycle
//! against simulated time.

pub mod clock;

pub use clock::{Clock, Deadline};
