//! Brush servo
//!
//! Maps a [`BrushPosition`] in [-1.0, 1.0] linearly onto the servo's
//! pulse range. Releasing stops the pulse train so the servo stops
//! holding (and stops jittering).

use katharos_core::traits::BrushPosition;
use katharos_hal::PwmOutput;

/// Servo pulse range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServoConfig {
    /// Pulse width at position -1.0 (µs)
    pub min_pulse_us: u16,
    /// Pulse width at position 1.0 (µs)
    pub max_pulse_us: u16,
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self {
            min_pulse_us: 1000,
            max_pulse_us: 2000,
        }
    }
}

impl ServoConfig {
    /// Pulse width for a position
    pub fn pulse_for(&self, position: BrushPosition) -> u16 {
        let min = f32::from(self.min_pulse_us);
        let max = f32::from(self.max_pulse_us);
        let mid = (min + max) / 2.0;
        let half_span = (max - min) / 2.0;
        let width = mid + position.value() * half_span;
        // Round half up; positions are already clamped to the range
        (width + 0.5) as u16
    }
}

/// Hobby servo on a pulse output
pub struct Servo<P> {
    pwm: P,
    config: ServoConfig,
    position: Option<BrushPosition>,
}

impl<P: PwmOutput> Servo<P> {
    pub fn new(pwm: P, config: ServoConfig) -> Self {
        Self {
            pwm,
            config,
            position: None,
        }
    }

    /// Command a position and hold it
    pub fn set_position(&mut self, position: BrushPosition) {
        let width = self.config.pulse_for(position);
        self.pwm.set_pulse_width_us(width);
        self.position = Some(position);
    }

    /// Stop pulsing; the horn is left where it is
    pub fn release(&mut self) {
        self.pwm.disable();
    }

    /// Last commanded position
    pub fn position(&self) -> Option<BrushPosition> {
        self.position
    }

    pub fn is_holding(&self) -> bool {
        self.pwm.is_enabled()
    }
}
