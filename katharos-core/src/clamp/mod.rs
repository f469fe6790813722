//! Chuck clamping with encoder stall detection
//!
//! The chuck is a one-way clamp: the motor drives it shut and it stays
//! shut mechanically. A grip is confirmed when the encoder on the chuck
//! drive stops advancing, meaning the jaws have seized on the disc.

pub mod controller;
pub mod stall;

pub use controller::{ClampController, GripResult};
pub use stall::ClampAttempt;
