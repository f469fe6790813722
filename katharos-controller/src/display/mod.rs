//! Status panel for the bench build
//!
//! Renders the 16x2 panel as a framed block on stdout. When stdout is
//! not a terminal (piped into a log file, run under a service manager)
//! the panel falls back to [`NullDisplay`] so screens don't interleave
//! with log output.

use std::io::{self, IsTerminal, Write};

use katharos_core::screens::PANEL_COLS;
use katharos_core::traits::{NullDisplay, StatusDisplay};

/// Framed two-row rendering of the panel
pub fn render(line1: &str, line2: &str) -> String {
    let border = "-".repeat(PANEL_COLS);
    format!(
        "+{border}+\n|{line1:<width$}|\n|{line2:<width$}|\n+{border}+\n",
        width = PANEL_COLS
    )
}

/// Panel drawn on the terminal
#[derive(Debug, Default)]
pub struct TerminalDisplay;

impl StatusDisplay for TerminalDisplay {
    fn show(&mut self, line1: &str, line2: &str) {
        let mut out = io::stdout().lock();
        // A broken stdout only loses the panel, never the cycle
        let _ = out.write_all(render(line1, line2).as_bytes());
        let _ = out.flush();
    }
}

/// Whichever panel is available
pub enum Panel {
    Terminal(TerminalDisplay),
    Null(NullDisplay),
}

impl Panel {
    pub fn detect() -> Self {
        if io::stdout().is_terminal() {
            Panel::Terminal(TerminalDisplay)
        } else {
            log::info!("stdout is not a terminal, status panel disabled");
            Panel::Null(NullDisplay)
        }
    }
}

impl StatusDisplay for Panel {
    fn show(&mut self, line1: &str, line2: &str) {
        log::debug!("Panel: {:?} / {:?}", line1, line2);
        match self {
            Panel::Terminal(display) => display.show(line1, line2),
            Panel::Null(display) => display.show(line1, line2),
        }
    }
}
