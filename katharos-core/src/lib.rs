//! Board-agnostic core logic for the disc cleaning fixture
//!
//! This crate contains all cycle logic that does not depend on
//! specific hardware implementations:
//!
//! - Port traits (actuators, sensors, status display, inspector)
//! - Injectable clock used for every blocking wait
//! - Phase state machine and its transition table
//! - Safety stop monitoring and emergency shutdown
//! - Stall-detecting clamp controller
//! - Timed wash cycle
//! - Timing constants and inspection policy

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod clamp;
pub mod config;
pub mod cycle;
pub mod inspect;
pub mod safety;
pub mod scheduler;
pub mod screens;
pub mod state;
pub mod traits;
pub mod wash;

#[cfg(test)]
pub(crate) mod testing;
