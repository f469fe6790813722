//! Timed scrub cycle
//!
//! Lowers the brush, runs the central wash motor for a fixed number of
//! one-second ticks and lifts the brush again. The servo drifts under
//! vibration, so the scrub position is re-commanded on every tick.

use crate::config::CycleTiming;
use crate::scheduler::Clock;
use crate::traits::{ActuatorPort, BrushPosition, Input, Relay, SensorPort};

/// How a wash ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WashOutcome {
    /// All ticks ran
    Completed,
    /// Emergency stop seen before the last tick
    Interrupted {
        /// Ticks completed before the stop was seen
        elapsed_s: u32,
    },
}

impl WashOutcome {
    /// Number of whole wash ticks that ran
    pub fn elapsed_ticks(&self, duration_s: u32) -> u32 {
        match self {
            WashOutcome::Completed => duration_s,
            WashOutcome::Interrupted { elapsed_s } => *elapsed_s,
        }
    }
}

/// Wash cycle runner
#[derive(Debug, Clone)]
pub struct WashCycle {
    tick_ms: u32,
    refresh_every: u32,
    settle_ms: u32,
}

impl WashCycle {
    pub fn new(timing: &CycleTiming) -> Self {
        Self {
            tick_ms: timing.wash_tick_ms,
            refresh_every: timing.status_refresh_ticks.max(1),
            settle_ms: timing.brush_settle_ms,
        }
    }

    /// Scrub for `duration_s` ticks
    ///
    /// `on_tick` receives the remaining seconds on every refresh tick
    /// (ticks 0, 5, 10, ... with the default refresh period). The wash
    /// motor is stopped and the brush lifted however the loop ends; a
    /// stop seen mid-wash only breaks the loop.
    pub fn run(
        &self,
        actuators: &mut impl ActuatorPort,
        sensors: &impl SensorPort,
        clock: &mut impl Clock,
        duration_s: u32,
        mut on_tick: impl FnMut(u32),
    ) -> WashOutcome {
        actuators.set_position(BrushPosition::SCRUB);
        clock.sleep_ms(self.settle_ms);
        actuators.set_relay(Relay::Washer, true);
        log::info!("Wash started for {} s", duration_s);

        let mut outcome = WashOutcome::Completed;
        for tick in 0..duration_s {
            if sensors.read_digital(Input::Stop) {
                outcome = WashOutcome::Interrupted { elapsed_s: tick };
                break;
            }

            if tick % self.refresh_every == 0 {
                on_tick(duration_s - tick);
            }

            actuators.set_position(BrushPosition::SCRUB);
            clock.sleep_ms(self.tick_ms);
        }

        actuators.set_relay(Relay::Washer, false);
        actuators.set_position(BrushPosition::HOME);
        clock.sleep_ms(self.settle_ms);

        match outcome {
            WashOutcome::Completed => log::info!("Wash completed"),
            WashOutcome::Interrupted { elapsed_s } => {
                log::warn!("Wash interrupted after {} s", elapsed_s)
            }
        }
        outcome
    }
}
