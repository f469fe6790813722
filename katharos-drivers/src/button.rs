//! Panel push buttons
//!
//! Both panel buttons close to ground with an external pull-up, so a
//! press reads low. No debouncing: callers poll and only care about the
//! current level.

use katharos_hal::InputPin;

pub struct Button<P> {
    pin: P,
    active_low: bool,
}

impl<P: InputPin> Button<P> {
    /// Button that reads low when pressed
    pub fn active_low(pin: P) -> Self {
        Self {
            pin,
            active_low: true,
        }
    }

    /// Button that reads high when pressed
    pub fn active_high(pin: P) -> Self {
        Self {
            pin,
            active_low: false,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pin.is_high() != self.active_low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockPin;

    #[test]
    fn test_active_low() {
        let pin = MockPin::new(true);
        let button = Button::active_low(pin.clone());
        assert!(!button.is_pressed());

        pin.drive(false);
        assert!(button.is_pressed());
    }

    #[test]
    fn test_active_high() {
        let pin = MockPin::new(false);
        let button = Button::active_high(pin.clone());
        assert!(!button.is_pressed());

        pin.drive(true);
        assert!(button.is_pressed());
    }
}
