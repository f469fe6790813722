//! Bench threads
//!
//! Each thread stands in for one piece of the physical fixture and exits
//! once [`SHUTDOWN`](crate::channels::SHUTDOWN) is raised (the operator
//! thread is left blocked on stdin and dies with the process).

pub mod encoder;
pub mod operator;

pub use encoder::spawn_encoder;
pub use operator::spawn_operator;
