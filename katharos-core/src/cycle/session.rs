//! Per-disc wash bookkeeping

/// Transient record for the disc currently being cleaned
///
/// Created when a grip succeeds, dropped when the disc leaves the
/// Cleaning/Finished phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WashSession {
    /// Wash ticks run on this disc across all attempts
    pub elapsed_ticks: u32,
    /// Residue verdicts received (each one triggers a re-wash)
    pub retry_count: u32,
}

impl WashSession {
    /// Account for one wash pass
    pub fn record_wash(&mut self, ticks: u32) {
        self.elapsed_ticks = self.elapsed_ticks.saturating_add(ticks);
    }

    /// Account for a residue verdict
    pub fn record_residue(&mut self) {
        self.retry_count = self.retry_count.saturating_add(1);
    }

    /// Check if the re-wash budget is spent
    pub fn retries_exhausted(&self, max_retries: Option<u32>) -> bool {
        max_retries.is_some_and(|max| self.retry_count > max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_retries_never_exhaust() {
        let mut session = WashSession::default();
        for _ in 0..1_000 {
            session.record_residue();
        }
        assert!(!session.retries_exhausted(None));
    }

    #[test]
    fn test_retry_cap() {
        let mut session = WashSession::default();
        session.record_residue();
        assert!(!session.retries_exhausted(Some(1)));
        session.record_residue();
        assert!(session.retries_exhausted(Some(1)));
    }

    #[test]
    fn test_wash_ticks_accumulate() {
        let mut session = WashSession::default();
        session.record_wash(30);
        session.record_wash(12);
        assert_eq!(session.elapsed_ticks, 42);
    }
}
