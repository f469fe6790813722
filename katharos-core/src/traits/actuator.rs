//! Actuator port
//!
//! The fixture has two relay-switched motors and one positional actuator
//! (the brush servo):
//! - Chuck motor: opens the clamp, or drives it shut against the disc
//! - Washer motor: spins the central scrub motor
//! - Brush: moves between the home (lifted) and scrub (lowered) positions

/// Relay-switched motors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relay {
    /// Clamp (chuck) motor
    Chuck,
    /// Central wash motor
    Washer,
}

impl Relay {
    /// All relays, in shutdown order
    pub const ALL: [Relay; 2] = [Relay::Chuck, Relay::Washer];
}

/// Normalized brush actuator position in `[-1.0, 1.0]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct BrushPosition(f32);

impl BrushPosition {
    /// Lifted clear of the disc
    pub const HOME: BrushPosition = BrushPosition(-1.0);
    /// Lowered onto the disc
    pub const SCRUB: BrushPosition = BrushPosition(0.0);

    /// Create a position, clamping into the valid range
    ///
    /// NaN collapses to home so a bad computation can never drive the
    /// brush into the disc.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::HOME;
        }
        Self(value.clamp(-1.0, 1.0))
    }

    /// Raw normalized value
    pub fn value(self) -> f32 {
        self.0
    }
}

/// Actuator control used by the cycle
///
/// Implementations must be cheap and non-blocking: settle delays are the
/// caller's responsibility, taken through the [`Clock`](crate::scheduler::Clock).
pub trait ActuatorPort {
    /// Energize or de-energize a motor relay
    fn set_relay(&mut self, relay: Relay, on: bool);

    /// Command the brush to a position (re-attaches if released)
    fn set_position(&mut self, position: BrushPosition);

    /// Drop holding torque on the brush actuator
    fn release(&mut self);
}
