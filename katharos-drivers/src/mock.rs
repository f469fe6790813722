//! In-memory pins for driver tests

use std::cell::Cell;
use std::rc::Rc;

use katharos_hal::{InputPin, OutputPin, PwmOutput};

/// Digital line whose level is shared with the test
#[derive(Debug, Clone, Default)]
pub struct MockPin {
    level: Rc<Cell<bool>>,
    writes: Rc<Cell<u32>>,
}

impl MockPin {
    pub fn new(level: bool) -> Self {
        let pin = Self::default();
        pin.level.set(level);
        pin
    }

    pub fn level(&self) -> bool {
        self.level.get()
    }

    /// Drive the line from outside, as wiring would
    pub fn drive(&self, level: bool) {
        self.level.set(level);
    }

    pub fn writes(&self) -> u32 {
        self.writes.get()
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.level.set(true);
        self.writes.set(self.writes.get() + 1);
    }

    fn set_low(&mut self) {
        self.level.set(false);
        self.writes.set(self.writes.get() + 1);
    }

    fn is_set_high(&self) -> bool {
        self.level.get()
    }
}

impl InputPin for MockPin {
    fn is_high(&self) -> bool {
        self.level.get()
    }
}

/// Pulse output whose state is shared with the test
#[derive(Debug, Clone, Default)]
pub struct MockPwm {
    width_us: Rc<Cell<Option<u16>>>,
}

impl MockPwm {
    /// Current pulse width, `None` when detached
    pub fn width_us(&self) -> Option<u16> {
        self.width_us.get()
    }
}

impl PwmOutput for MockPwm {
    fn set_pulse_width_us(&mut self, width_us: u16) {
        self.width_us.set(Some(width_us));
    }

    fn disable(&mut self) {
        self.width_us.set(None);
    }

    fn is_enabled(&self) -> bool {
        self.width_us.get().is_some()
    }
}
