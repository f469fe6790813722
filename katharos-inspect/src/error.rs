//! Inspection errors

use std::io;

use katharos_core::inspect::InspectionFailure;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("camera stream error: {0}")]
    Camera(#[from] io::Error),

    #[error("camera stream ended before a complete frame")]
    NoFrame,

    #[error("camera frame larger than {limit} bytes")]
    FrameTooLarge { limit: usize },

    #[error("inspection request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("inspection service returned HTTP {0}")]
    Status(u16),

    #[error("inspection response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("inspection response has no outputs")]
    MissingOutputs,
}

impl InspectError {
    /// Collapse into the failure kind the cycle reasons about
    pub fn failure(&self) -> InspectionFailure {
        match self {
            InspectError::Camera(_) | InspectError::NoFrame | InspectError::FrameTooLarge { .. } => {
                InspectionFailure::Capture
            }
            InspectError::Http(err) if err.is_timeout() => InspectionFailure::Timeout,
            InspectError::Http(_) => InspectionFailure::Transport,
            InspectError::Status(code) => InspectionFailure::Status(*code),
            InspectError::Decode(_) | InspectError::MissingOutputs => InspectionFailure::Malformed,
        }
    }
}

impl From<InspectError> for InspectionFailure {
    fn from(err: InspectError) -> Self {
        err.failure()
    }
}
