//! Terminal reporter.

use console::Style;

use super::{OutputMode, Reporter};

/// Reporter that writes to the terminal.
///
/// Messages go to stdout; warnings and errors go to stderr so that piped
/// output (e.g. `chainrig config --compact | jq`) stays machine-readable.
pub struct ConsoleReporter {
    mode: OutputMode,
    warning_style: Style,
    error_style: Style,
}

impl ConsoleReporter {
    /// Create a new terminal reporter.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            warning_style: Style::new().yellow(),
            error_style: Style::new().red().bold(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.warning_style.apply_to(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.error_style.apply_to(msg));
    }
}
