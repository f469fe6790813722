//! Grip attempt driver

use crate::config::StallConfig;
use crate::scheduler::{Clock, Deadline};
use crate::traits::{ActuatorPort, Input, Relay, SensorPort};

use super::stall::ClampAttempt;

/// Outcome of a grip attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GripResult {
    /// Encoder stalled: the chuck has seized on the disc
    Clamped,
    /// Encoder never stalled within the timeout
    NoGrip,
    /// Emergency stop asserted while sampling
    Aborted,
}

/// Drives the chuck shut and watches the encoder for a stall
#[derive(Debug, Clone)]
pub struct ClampController {
    config: StallConfig,
}

impl ClampController {
    pub fn new(config: StallConfig) -> Self {
        Self { config }
    }

    /// Run one grip attempt
    ///
    /// The chuck motor is energized for the duration of the attempt and
    /// de-energized on every exit path; grip is held mechanically.
    pub fn attempt_clamp(
        &self,
        actuators: &mut impl ActuatorPort,
        sensors: &impl SensorPort,
        clock: &mut impl Clock,
    ) -> GripResult {
        actuators.set_relay(Relay::Chuck, true);
        sensors.reset_ticks();

        let result = self.sample_until_stall(sensors, clock);

        actuators.set_relay(Relay::Chuck, false);

        match result {
            GripResult::Clamped => log::info!("Chuck stalled, disc gripped"),
            GripResult::NoGrip => log::warn!(
                "No stall within {} ms ({} encoder ticks)",
                self.config.timeout_ms,
                sensors.ticks()
            ),
            GripResult::Aborted => log::warn!("Grip attempt aborted by emergency stop"),
        }
        result
    }

    fn sample_until_stall(&self, sensors: &impl SensorPort, clock: &mut impl Clock) -> GripResult {
        let deadline = Deadline::start(clock, self.config.timeout_ms);
        let mut attempt = ClampAttempt::new(clock.now_ms(), self.config.sensitivity);

        while !deadline.expired(clock) {
            // Stop wins over a stall seen on the same sample
            if sensors.read_digital(Input::Stop) {
                return GripResult::Aborted;
            }

            if attempt.sample(sensors.ticks()) {
                log::debug!(
                    "Stall after {} ms, {} stagnant samples",
                    deadline.elapsed_ms(clock),
                    attempt.stagnant_samples()
                );
                return GripResult::Clamped;
            }

            clock.sleep_ms(self.config.sample_interval_ms);
        }

        GripResult::NoGrip
    }
}
