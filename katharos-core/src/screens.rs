//! Operator screens
//!
//! Every message the fixture shows, as data. The panel is 16 columns by
//! 2 rows; longer text is cut at the column limit.

use core::fmt::Write;

use heapless::String;

/// Panel width in characters
pub const PANEL_COLS: usize = 16;

/// One rendered panel line
pub type Line = String<PANEL_COLS>;

/// Screens shown on the status panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Shown once after boot
    Ready,
    /// Idle prompt: press start to open the chuck
    OpenPrompt,
    Opening,
    /// Waiting for a disc: press start to clamp
    LoadPrompt,
    Clamping,
    Secured,
    NoGrip,
    Cleaning,
    Washing { remaining_s: u32 },
    Scanning,
    DirtFound,
    RetryLimit,
    Complete,
    EmergencyStop,
}

impl Screen {
    /// Static text for both rows (the washing countdown is rendered in [`Screen::lines`])
    fn text(&self) -> (&'static str, &'static str) {
        match self {
            Screen::Ready => ("System Ready", "Press Start"),
            Screen::OpenPrompt => ("Switch: OPEN", "Press GREEN"),
            Screen::Opening => ("Opening Chuck", "Please Wait..."),
            Screen::LoadPrompt => ("Load Disc", "Switch: CLAMP"),
            Screen::Clamping => ("Clamping...", "Checking Grip"),
            Screen::Secured => ("Disc Secured", "Starting Wash"),
            Screen::NoGrip => ("Error: No Grip", "Try Again"),
            Screen::Cleaning => ("Cleaning...", "Brush Down"),
            Screen::Washing { .. } => ("Washing...", ""),
            Screen::Scanning => ("Scanning...", "Analyzing Disc"),
            Screen::DirtFound => ("Dirt Found!", "Washing Again"),
            Screen::RetryLimit => ("Still Dirty", "Check Disc"),
            Screen::Complete => ("Clean Complete!", "Grab Disc"),
            Screen::EmergencyStop => ("E-STOP PRESSED", "Resetting..."),
        }
    }

    /// Render both rows, truncated to the panel width
    pub fn lines(&self) -> (Line, Line) {
        let (top, bottom) = self.text();
        let line1 = fit(top);
        let line2 = match self {
            Screen::Washing { remaining_s } => {
                let mut line = Line::new();
                // Overflow only drops trailing characters
                let _ = write!(line, "{}s Left", remaining_s);
                line
            }
            _ => fit(bottom),
        };
        (line1, line2)
    }
}

fn fit(text: &str) -> Line {
    let mut line = Line::new();
    for ch in text.chars() {
        if line.push(ch).is_err() {
            break;
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_washing_countdown() {
        let (top, bottom) = Screen::Washing { remaining_s: 25 }.lines();
        assert_eq!(top.as_str(), "Washing...");
        assert_eq!(bottom.as_str(), "25s Left");
    }

    #[test]
    fn test_all_static_screens_fit_the_panel() {
        let screens = [
            Screen::Ready,
            Screen::OpenPrompt,
            Screen::Opening,
            Screen::LoadPrompt,
            Screen::Clamping,
            Screen::Secured,
            Screen::NoGrip,
            Screen::Cleaning,
            Screen::Scanning,
            Screen::DirtFound,
            Screen::RetryLimit,
            Screen::Complete,
            Screen::EmergencyStop,
        ];
        for screen in screens {
            let (top, bottom) = screen.text();
            assert!(top.len() <= PANEL_COLS, "{:?}", screen);
            assert!(bottom.len() <= PANEL_COLS, "{:?}", screen);
        }
    }

    #[test]
    fn test_long_text_is_cut() {
        assert_eq!(fit("0123456789abcdefXYZ").as_str(), "0123456789abcdef");
    }
}
