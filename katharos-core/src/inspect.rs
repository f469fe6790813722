//! Residue inspection contract and failure policy
//!
//! The cycle asks an [`Inspector`] whether the disc still carries residue.
//! Inspection can fail in several ways (no frame, network down, bad
//! response); [`InspectionPolicy`] decides what a failure counts as.

use core::fmt;

/// Residue verdict for one freshly captured frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InspectionResult {
    pub is_dirty: bool,
}

impl InspectionResult {
    pub const CLEAN: InspectionResult = InspectionResult { is_dirty: false };
    pub const DIRTY: InspectionResult = InspectionResult { is_dirty: true };
}

/// Why a verdict could not be obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectionFailure {
    /// No frame could be read from the camera stream
    Capture,
    /// Connection or protocol error talking to the service
    Transport,
    /// Service did not answer within the request timeout
    Timeout,
    /// Service answered with a non-200 status
    Status(u16),
    /// Response body was not the expected JSON shape
    Malformed,
}

impl fmt::Display for InspectionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectionFailure::Capture => write!(f, "frame capture failed"),
            InspectionFailure::Transport => write!(f, "transport error"),
            InspectionFailure::Timeout => write!(f, "request timed out"),
            InspectionFailure::Status(code) => write!(f, "service returned status {}", code),
            InspectionFailure::Malformed => write!(f, "malformed response"),
        }
    }
}

/// What an unavailable inspection counts as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InspectionPolicy {
    /// Treat failure as clean: the cycle finishes without confirmation
    #[default]
    FailOpen,
    /// Treat failure as dirty: the disc is washed again
    FailClosed,
}

impl InspectionPolicy {
    /// Turn an inspection attempt into a verdict
    pub fn resolve(self, attempt: Result<InspectionResult, InspectionFailure>) -> InspectionResult {
        match attempt {
            Ok(result) => result,
            Err(failure) => {
                log::warn!("Inspection unavailable ({}), applying {:?}", failure, self);
                match self {
                    InspectionPolicy::FailOpen => InspectionResult::CLEAN,
                    InspectionPolicy::FailClosed => InspectionResult::DIRTY,
                }
            }
        }
    }
}

/// Source of residue verdicts
///
/// Each call must capture and evaluate a fresh frame; results are never
/// cached between calls.
pub trait Inspector {
    fn try_inspect(&mut self) -> Result<InspectionResult, InspectionFailure>;
}

impl<I: Inspector + ?Sized> Inspector for &mut I {
    fn try_inspect(&mut self) -> Result<InspectionResult, InspectionFailure> {
        (**self).try_inspect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAILURES: [InspectionFailure; 5] = [
        InspectionFailure::Capture,
        InspectionFailure::Transport,
        InspectionFailure::Timeout,
        InspectionFailure::Status(503),
        InspectionFailure::Malformed,
    ];

    #[test]
    fn test_fail_open_treats_failures_as_clean() {
        for failure in FAILURES {
            assert_eq!(
                InspectionPolicy::FailOpen.resolve(Err(failure)),
                InspectionResult::CLEAN
            );
        }
    }

    #[test]
    fn test_fail_closed_treats_failures_as_dirty() {
        for failure in FAILURES {
            assert_eq!(
                InspectionPolicy::FailClosed.resolve(Err(failure)),
                InspectionResult::DIRTY
            );
        }
    }

    #[test]
    fn test_verdicts_pass_through_either_policy() {
        for policy in [InspectionPolicy::FailOpen, InspectionPolicy::FailClosed] {
            assert_eq!(policy.resolve(Ok(InspectionResult::DIRTY)), InspectionResult::DIRTY);
            assert_eq!(policy.resolve(Ok(InspectionResult::CLEAN)), InspectionResult::CLEAN);
        }
    }
}
