//! Events that trigger phase transitions

/// Outcomes reported by the phase handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Operator-driven events
    /// Start pressed in Idle and the chuck was run open
    ClampOpened,

    // Grip events
    /// Encoder stalled: the chuck has seized on the disc
    Gripped,
    /// Encoder kept moving until the grip timeout
    GripFailed,

    // Inspection events
    /// Vision service reported residue
    ResidueFound,
    /// Vision service reported a clean disc (or failed open)
    InspectionPassed,
    /// Residue reported again but the re-wash budget is spent
    RetryLimitReached,

    // Completion events
    /// Completion message has been shown long enough
    DwellElapsed,

    // Safety events
    /// Emergency stop asserted
    SafetyTrip,
}

impl Event {
    /// Check if this event comes from the safety path
    pub fn is_safety_event(&self) -> bool {
        matches!(self, Event::SafetyTrip)
    }
}
