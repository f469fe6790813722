//! Simulated fixture hardware
//!
//! Every pin is an atomic shared between the driver that owns it and the
//! bench threads that play the part of the wiring: the operator thread
//! presses buttons, the encoder thread pulses while the chuck relay is
//! energized.

use std::sync::atomic::{AtomicBool, AtomicU16, Ordering};
use std::sync::Arc;

use katharos_drivers::{Button, FixtureActuators, FixtureSensors, RelayMotor, Servo, ServoConfig};
use katharos_hal::{InputPin, OutputPin, PwmOutput};

use crate::channels::ENCODER_TICKS;

/// Digital line shared between a driver and the bench
#[derive(Debug, Clone, Default)]
pub struct BenchLine(Arc<AtomicBool>);

impl BenchLine {
    pub fn new(level: bool) -> Self {
        Self(Arc::new(AtomicBool::new(level)))
    }

    pub fn level(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Force the level from the wiring side
    pub fn drive(&self, level: bool) {
        self.0.store(level, Ordering::Release);
    }
}

impl OutputPin for BenchLine {
    fn set_high(&mut self) {
        self.drive(true);
    }

    fn set_low(&mut self) {
        self.drive(false);
    }

    fn is_set_high(&self) -> bool {
        self.level()
    }
}

impl InputPin for BenchLine {
    fn is_high(&self) -> bool {
        self.level()
    }
}

/// Servo pulse output; width 0 means detached
#[derive(Debug, Clone, Default)]
pub struct BenchPwm(Arc<AtomicU16>);

impl BenchPwm {
    pub fn width_us(&self) -> Option<u16> {
        match self.0.load(Ordering::Acquire) {
            0 => None,
            width => Some(width),
        }
    }
}

impl PwmOutput for BenchPwm {
    fn set_pulse_width_us(&mut self, width_us: u16) {
        self.0.store(width_us.max(1), Ordering::Release);
    }

    fn disable(&mut self) {
        self.0.store(0, Ordering::Release);
    }

    fn is_enabled(&self) -> bool {
        self.width_us().is_some()
    }
}

pub type BenchActuators = FixtureActuators<BenchLine, BenchLine, BenchPwm>;
pub type BenchSensors = FixtureSensors<'static, BenchLine, BenchLine>;

/// Wiring of the simulated fixture
#[derive(Debug, Clone)]
pub struct BenchFixture {
    pub chuck: BenchLine,
    pub washer: BenchLine,
    pub brush: BenchPwm,
    /// Active-low, idles high
    pub start: BenchLine,
    /// Active-low, idles high
    pub stop: BenchLine,
    pub encoder: BenchLine,
    /// Whether a disc sits in the chuck for it to seize on
    pub disc_loaded: Arc<AtomicBool>,
}

impl BenchFixture {
    pub fn new() -> Self {
        Self {
            chuck: BenchLine::new(false),
            washer: BenchLine::new(false),
            brush: BenchPwm::default(),
            start: BenchLine::new(true),
            stop: BenchLine::new(true),
            encoder: BenchLine::new(false),
            disc_loaded: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn actuators(&self) -> BenchActuators {
        FixtureActuators::new(
            RelayMotor::new(self.chuck.clone(), true),
            RelayMotor::new(self.washer.clone(), true),
            Servo::new(self.brush.clone(), ServoConfig::default()),
        )
    }

    pub fn sensors(&self) -> BenchSensors {
        FixtureSensors::new(
            Button::active_low(self.start.clone()),
            Button::active_low(self.stop.clone()),
            &ENCODER_TICKS,
        )
    }

    pub fn disc_loaded(&self) -> bool {
        self.disc_loaded.load(Ordering::Acquire)
    }

    /// Flip the loaded state, returning the new one
    pub fn toggle_disc(&self) -> bool {
        !self.disc_loaded.fetch_xor(true, Ordering::AcqRel)
    }
}

impl Default for BenchFixture {
    fn default() -> Self {
        Self::new()
    }
}
