//! Pulse output abstraction for hobby servos
//!
//! A servo is commanded by the width of a pulse repeated every ~20 ms.
//! Stopping the pulse train ("detaching") lets the servo relax, which
//! removes holding torque and the jitter that comes with it.

/// Servo-style pulse output
pub trait PwmOutput {
    /// Start (or keep) emitting pulses of the given width in microseconds
    fn set_pulse_width_us(&mut self, width_us: u16);

    /// Stop emitting pulses entirely
    fn disable(&mut self);

    /// Check if pulses are currently being emitted
    fn is_enabled(&self) -> bool;
}
