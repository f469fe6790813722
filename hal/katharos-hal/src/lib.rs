//! Katharos Hardware Abstraction Layer
//!
//! This crate defines the pin-level traits that a board support layer
//! implements. Drivers in `katharos-drivers` are written against these
//! traits only, so the same relay, servo and encoder code runs on a real
//! single-board computer or on the bench simulator.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  katharos-controller (wiring, bench)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  katharos-drivers (relay, servo, ...)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  katharos-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`pwm::PwmOutput`] - Servo-style pulse output with detach

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod pwm;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use pwm::PwmOutput;
