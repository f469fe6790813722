//! Pin-level drivers
//!
//! Concrete implementations of the katharos-core ports on top of the
//! katharos-hal pin traits:
//!
//! - Relay motors (chuck, wash) with configurable polarity
//! - Brush servo (position to pulse width, detach on release)
//! - Active-low panel buttons
//! - Encoder edge counter
//!
//! [`fixture`] composes them into `ActuatorPort` and `SensorPort`.

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod encoder;
pub mod fixture;
pub mod relay;
pub mod servo;

pub use button::Button;
pub use encoder::EncoderInput;
pub use fixture::{FixtureActuators, FixtureSensors};
pub use relay::RelayMotor;
pub use servo::{Servo, ServoConfig};

#[cfg(test)]
extern crate std;

#[cfg(test)]
pub(crate) mod mock;
