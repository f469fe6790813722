//! GPIO pin abstractions
//!
//! Relay coils and panel buttons are plain digital lines. Polarity
//! (active-high vs active-low wiring) is a driver concern, not a pin
//! concern: these traits only speak electrical levels.

/// Digital output line driving a relay coil or similar load
pub trait OutputPin {
    /// Drive the line high (logic 1)
    fn set_high(&mut self);

    /// Drive the line low (logic 0)
    fn set_low(&mut self);

    /// Drive the line to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Last level written to the line
    fn is_set_high(&self) -> bool;
}

/// Digital input line (buttons, encoder channel)
pub trait InputPin {
    /// Check if the line reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the line reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}
