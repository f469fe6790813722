//! Residue inspection over a camera stream and a remote vision service
//!
//! One inspection:
//!
//! ```text
//! camera (MJPEG/TCP) ─► drain stale frames ─► one JPEG ─► base64
//!                                                            │
//!               verdict ◄─ outputs[0].boolean ◄─ HTTP POST ◄─┘
//! ```
//!
//! [`InspectionClient`] implements the core [`Inspector`] port, so the
//! cycle only sees a verdict or an [`InspectionFailure`]; the failure
//! policy lives in the core.
//!
//! [`Inspector`]: katharos_core::inspect::Inspector
//! [`InspectionFailure`]: katharos_core::inspect::InspectionFailure

#![deny(unsafe_code)]

pub mod camera;
pub mod client;
pub mod config;
pub mod error;
pub mod payload;

pub use camera::{Frame, FrameSource, MjpegReader, TcpCamera};
pub use client::InspectionClient;
pub use config::InspectionConfig;
pub use error::InspectError;
