//! Phase state machine
//!
//! Defines the authoritative phase sequence of the fixture.
//! The table is explicit, finite, and deterministic; the blocking work
//! behind each phase lives in [`crate::cycle`].

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::CyclePhase;
