//! Configuration types
//!
//! The fixture has no runtime configuration: every value here is a fixed
//! constant chosen at construction. Tests shrink or reshape them to
//! exercise edge cases.

pub mod timing;

pub use timing::*;
