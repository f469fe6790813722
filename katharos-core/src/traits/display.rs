//! Status display trait for the two-line operator panel

/// Two-line status output
///
/// Implementations must not fail the caller: a panel that cannot be
/// written to logs the problem and carries on. Fixtures without a
/// panel use [`NullDisplay`].
pub trait StatusDisplay {
    /// Replace both lines of the panel
    fn show(&mut self, line1: &str, line2: &str);
}

/// Display used when no panel is fitted or it failed to initialize
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDisplay;

impl StatusDisplay for NullDisplay {
    fn show(&mut self, _line1: &str, _line2: &str) {}
}

impl<D: StatusDisplay + ?Sized> StatusDisplay for &mut D {
    fn show(&mut self, line1: &str, line2: &str) {
        (**self).show(line1, line2)
    }
}
