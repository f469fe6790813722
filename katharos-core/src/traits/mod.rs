//! Hardware abstraction traits
//!
//! These traits define the interface between the cycle logic
//! and fixture-specific implementations.

pub mod actuator;
pub mod display;
pub mod sensor;

pub use actuator::{ActuatorPort, BrushPosition, Relay};
pub use display::{NullDisplay, StatusDisplay};
pub use sensor::{Input, SensorPort, TickCounter};
