//! Phase definition
//!
//! Actuator behavior in each phase is a function of the phase and the
//! event that ended it.

use super::events::Event;

/// Cycle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CyclePhase {
    /// Clamp closed or unknown, motors off, brush home; waiting for start
    #[default]
    Idle,
    /// Clamp open; waiting for the operator to load a disc and press start
    AwaitingLoad,
    /// Disc clamped; wash and inspect until clean
    Cleaning,
    /// Disc clean; completion message showing
    Finished,
}

impl CyclePhase {
    /// Check if a disc is held in the clamp in this phase
    pub fn holds_disc(&self) -> bool {
        matches!(self, CyclePhase::Cleaning | CyclePhase::Finished)
    }

    /// Process an event and return the next phase
    ///
    /// A safety trip wins from every phase. Events that make no sense
    /// for the current phase leave it unchanged.
    pub fn transition(self, event: Event) -> Self {
        use CyclePhase::*;
        use Event::*;

        match (self, event) {
            (_, SafetyTrip) => Idle,

            (Idle, ClampOpened) => AwaitingLoad,

            (AwaitingLoad, Gripped) => Cleaning,
            (AwaitingLoad, GripFailed) => Idle,

            // Residue found: wash the same disc again
            (Cleaning, ResidueFound) => Cleaning,
            (Cleaning, InspectionPassed) => Finished,
            (Cleaning, RetryLimitReached) => Idle,

            (Finished, DwellElapsed) => Idle,

            // Default: stay in current phase
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safety_trip_from_any_phase() {
        let phases = [
            CyclePhase::Idle,
            CyclePhase::AwaitingLoad,
            CyclePhase::Cleaning,
            CyclePhase::Finished,
        ];

        for phase in phases {
            assert_eq!(phase.transition(Event::SafetyTrip), CyclePhase::Idle);
        }
    }

    #[test]
    fn test_happy_path() {
        let phase = CyclePhase::Idle;
        let phase = phase.transition(Event::ClampOpened);
        assert_eq!(phase, CyclePhase::AwaitingLoad);
        let phase = phase.transition(Event::Gripped);
        assert_eq!(phase, CyclePhase::Cleaning);
        let phase = phase.transition(Event::ResidueFound);
        assert_eq!(phase, CyclePhase::Cleaning);
        let phase = phase.transition(Event::InspectionPassed);
        assert_eq!(phase, CyclePhase::Finished);
        let phase = phase.transition(Event::DwellElapsed);
        assert_eq!(phase, CyclePhase::Idle);
    }

    #[test]
    fn test_grip_failure_returns_to_idle() {
        assert_eq!(
            CyclePhase::AwaitingLoad.transition(Event::GripFailed),
            CyclePhase::Idle
        );
    }

    #[test]
    fn test_retry_limit_returns_to_idle() {
        assert_eq!(
            CyclePhase::Cleaning.transition(Event::RetryLimitReached),
            CyclePhase::Idle
        );
    }

    #[test]
    fn test_out_of_phase_events_are_ignored() {
        assert_eq!(CyclePhase::Idle.transition(Event::Gripped), CyclePhase::Idle);
        assert_eq!(
            CyclePhase::Finished.transition(Event::ResidueFound),
            CyclePhase::Finished
        );
        assert_eq!(
            CyclePhase::AwaitingLoad.transition(Event::DwellElapsed),
            CyclePhase::AwaitingLoad
        );
    }

    #[test]
    fn test_phase_predicates() {
        assert!(CyclePhase::Cleaning.holds_disc());
        assert!(CyclePhase::Finished.holds_disc());
        assert!(!CyclePhase::Idle.holds_disc());
        assert!(!CyclePhase::AwaitingLoad.holds_disc());
    }
}
