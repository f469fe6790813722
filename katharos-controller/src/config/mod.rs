//! Build-time configuration
//!
//! The credential is baked in at compile time
//! (`KATHAROS_API_KEY=... cargo build`); everything else is the
//! library defaults.

use std::time::Duration;

use katharos_core::config::CycleConfig;
use katharos_inspect::InspectionConfig;

/// Inference credential
const API_KEY: &str = match option_env!("KATHAROS_API_KEY") {
    Some(key) => key,
    None => "YOUR_API_KEY",
};

/// Edges per second the bench encoder produces while the chuck turns
pub const ENCODER_RATE_HZ: u64 = 400;

/// How long the bench chuck turns before it seizes on a loaded disc
pub const SEIZE_AFTER: Duration = Duration::from_millis(800);

/// How long a typed start press is held
pub const START_PRESS: Duration = Duration::from_millis(300);

pub fn cycle() -> CycleConfig {
    CycleConfig::default()
}

pub fn inspection() -> InspectionConfig {
    if API_KEY == "YOUR_API_KEY" {
        log::warn!("No KATHAROS_API_KEY set at build time, inspection requests will be rejected");
    }
    InspectionConfig::new(API_KEY)
}
