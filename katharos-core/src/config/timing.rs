//! Timing constants and cycle policy

use crate::inspect::InspectionPolicy;

/// Grip attempt parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StallConfig {
    /// Wall-clock budget for the chuck to seize (ms)
    pub timeout_ms: u32,
    /// Number of additional stagnant samples beyond the first before a
    /// stall is declared.
    ///
    /// A run of `sensitivity + 1` unchanged samples is a stall, so `0`
    /// means "the first unchanged sample" and the default `20` means
    /// roughly 210 ms without encoder movement.
    pub sensitivity: u32,
    /// Encoder sampling period (ms)
    pub sample_interval_ms: u32,
}

impl Default for StallConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 5_000,
            sensitivity: 20,
            sample_interval_ms: 10,
        }
    }
}

/// Fixed durations used by the cycle (all in ms unless noted)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleTiming {
    /// Pause between state machine ticks
    pub tick_cadence_ms: u32,
    /// Settle after homing the brush at boot
    pub boot_settle_ms: u32,
    /// How long the chuck motor runs to open the clamp
    pub open_clamp_ms: u32,
    /// Pause after opening before prompting for a disc
    pub post_open_pause_ms: u32,
    /// "Disc Secured" notice
    pub secured_notice_ms: u32,
    /// "No Grip" error notice
    pub no_grip_notice_ms: u32,
    /// Scrub duration (seconds)
    pub wash_duration_s: u32,
    /// Length of one wash tick
    pub wash_tick_ms: u32,
    /// Wash ticks between status refreshes
    pub status_refresh_ticks: u32,
    /// Brush settle after a move
    pub brush_settle_ms: u32,
    /// "Dirt Found" notice before re-washing
    pub dirty_notice_ms: u32,
    /// "Still Dirty" notice when the retry cap is hit
    pub retry_limit_notice_ms: u32,
    /// Completion message dwell
    pub finished_dwell_ms: u32,
    /// Brush settle during an emergency stop
    pub estop_settle_ms: u32,
    /// Poll period while waiting for the stop button to release
    pub estop_poll_ms: u32,
    /// Cooldown after the stop button releases
    pub estop_cooldown_ms: u32,
}

impl Default for CycleTiming {
    fn default() -> Self {
        Self {
            tick_cadence_ms: 50,
            boot_settle_ms: 500,
            open_clamp_ms: 3_000,
            post_open_pause_ms: 1_000,
            secured_notice_ms: 1_500,
            no_grip_notice_ms: 2_000,
            wash_duration_s: 30,
            wash_tick_ms: 1_000,
            status_refresh_ticks: 5,
            brush_settle_ms: 1_000,
            dirty_notice_ms: 2_000,
            retry_limit_notice_ms: 2_000,
            finished_dwell_ms: 4_000,
            estop_settle_ms: 500,
            estop_poll_ms: 100,
            estop_cooldown_ms: 2_000,
        }
    }
}

/// Everything the cycle needs decided up front
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleConfig {
    pub timing: CycleTiming,
    pub stall: StallConfig,
    /// What an unavailable inspection counts as
    pub inspection_policy: InspectionPolicy,
    /// Maximum re-washes per disc (`None` = retry until clean)
    pub max_retries: Option<u32>,
}
