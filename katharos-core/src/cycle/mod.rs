//! Cycle orchestration
//!
//! [`CycleStateMachine`] owns the fixture ports and runs the
//! open → load → clamp → wash → inspect → finish sequence one tick at a
//! time, with the emergency stop checked before every tick.

pub mod machine;
pub mod session;

pub use machine::{CycleError, CycleStateMachine, Fixture};
pub use session::WashSession;
