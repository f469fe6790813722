//! Safety monitoring
//!
//! Watches the emergency stop and drives the fixture into its safe state.

pub mod monitor;

pub use monitor::SafetyMonitor;
