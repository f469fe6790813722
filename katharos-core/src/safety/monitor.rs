//! Emergency stop monitor
//!
//! The safe state is: both motor relays off, brush commanded home and
//! then released. Every shutdown path (stop button, grip abort, operator
//! interrupt) goes through [`SafetyMonitor::emergency_stop`].

use crate::config::CycleTiming;
use crate::scheduler::Clock;
use crate::traits::{ActuatorPort, BrushPosition, Input, Relay, SensorPort};

/// Emergency stop handling
#[derive(Debug, Clone)]
pub struct SafetyMonitor {
    /// Brush settle before releasing torque (ms)
    settle_ms: u32,
    /// Poll period while the stop button is held (ms)
    poll_ms: u32,
    /// Quiet time after release before ticking resumes (ms)
    cooldown_ms: u32,
    /// Number of emergency shutdowns performed
    shutdowns: u32,
}

impl SafetyMonitor {
    /// Create a monitor using the emergency-stop timings
    pub fn new(timing: &CycleTiming) -> Self {
        Self {
            settle_ms: timing.estop_settle_ms,
            poll_ms: timing.estop_poll_ms.max(1),
            cooldown_ms: timing.estop_cooldown_ms,
            shutdowns: 0,
        }
    }

    /// Check if the emergency stop is asserted
    pub fn is_tripped(&self, sensors: &impl SensorPort) -> bool {
        sensors.read_digital(Input::Stop)
    }

    /// Drive the fixture into its safe state
    ///
    /// Idempotent: calling it again from the safe state repeats the same
    /// commands and leaves the same state.
    pub fn emergency_stop(&mut self, actuators: &mut impl ActuatorPort, clock: &mut impl Clock) {
        for relay in Relay::ALL {
            actuators.set_relay(relay, false);
        }
        actuators.set_position(BrushPosition::HOME);
        clock.sleep_ms(self.settle_ms);
        actuators.release();

        self.shutdowns = self.shutdowns.saturating_add(1);
        log::warn!("Emergency shutdown #{} complete", self.shutdowns);
    }

    /// Block until the stop button is released, then wait out the cooldown
    pub fn hold_until_released(&self, sensors: &impl SensorPort, clock: &mut impl Clock) {
        while self.is_tripped(sensors) {
            clock.sleep_ms(self.poll_ms);
        }
        log::info!("Emergency stop released, cooling down {} ms", self.cooldown_ms);
        clock.sleep_ms(self.cooldown_ms);
    }

    /// Number of emergency shutdowns performed so far
    pub fn shutdowns(&self) -> u32 {
        self.shutdowns
    }
}
