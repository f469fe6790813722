//! Relay-switched motor
//!
//! The chuck and wash motors are plain on/off loads behind a relay
//! board. Boards differ in coil polarity, so the driver maps the logical
//! state onto the pin level.

use katharos_hal::OutputPin;

/// Motor behind a single relay
pub struct RelayMotor<P> {
    pin: P,
    /// Relay energizes on a high level
    active_high: bool,
    on: bool,
}

impl<P: OutputPin> RelayMotor<P> {
    /// Wrap a relay pin and drive it to the off level
    pub fn new(pin: P, active_high: bool) -> Self {
        let mut motor = Self {
            pin,
            active_high,
            on: false,
        };
        motor.apply();
        motor
    }

    /// Switch the motor on or off
    pub fn set(&mut self, on: bool) {
        if on != self.on {
            log::trace!("Relay {}", if on { "on" } else { "off" });
        }
        self.on = on;
        self.apply();
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Pin level for the current state (accounting for polarity)
    pub fn pin_level(&self) -> bool {
        self.on == self.active_high
    }

    fn apply(&mut self) {
        let level = self.pin_level();
        self.pin.set_state(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockPin;

    #[test]
    fn test_starts_off() {
        let pin = MockPin::new(true);
        let motor = RelayMotor::new(pin.clone(), true);

        assert!(!motor.is_on());
        assert!(!pin.level());
    }

    #[test]
    fn test_active_high() {
        let pin = MockPin::default();
        let mut motor = RelayMotor::new(pin.clone(), true);

        motor.set(true);
        assert!(pin.level());
        motor.set(false);
        assert!(!pin.level());
    }

    #[test]
    fn test_active_low_inverts_level() {
        let pin = MockPin::default();
        let mut motor = RelayMotor::new(pin.clone(), false);
        assert!(pin.level());

        motor.set(true);
        assert!(motor.is_on());
        assert!(!pin.level());
    }

    #[test]
    fn test_repeated_off_rewrites_pin() {
        let pin = MockPin::default();
        let mut motor = RelayMotor::new(pin.clone(), true);

        motor.set(false);
        motor.set(false);
        // Construction plus both commands
        assert_eq!(pin.writes(), 3);
    }
}
