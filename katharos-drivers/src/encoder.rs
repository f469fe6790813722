//! Chuck encoder
//!
//! The encoder channel pulses while the chuck turns. Each rising edge
//! bumps a shared [`TickCounter`]; the grip detector only looks at
//! whether the count keeps moving, so direction is not decoded.

use katharos_core::traits::TickCounter;
use katharos_hal::InputPin;

/// Rising-edge counter on one encoder channel
pub struct EncoderInput<'a, P> {
    pin: P,
    counter: &'a TickCounter,
    last_level: bool,
}

impl<'a, P: InputPin> EncoderInput<'a, P> {
    pub fn new(pin: P, counter: &'a TickCounter) -> Self {
        let last_level = pin.is_high();
        Self {
            pin,
            counter,
            last_level,
        }
    }

    /// Sample the channel; counts and returns true on a rising edge
    pub fn poll(&mut self) -> bool {
        let level = self.pin.is_high();
        let rising = level && !self.last_level;
        self.last_level = level;
        if rising {
            self.counter.increment();
        }
        rising
    }
}
