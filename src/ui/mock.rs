//! Mock reporter for testing.
//!
//! `MockReporter` implements the [`Reporter`] trait and captures all
//! diagnostics for later assertion.
//!
//! # Example
//!
//! ```
//! use chainrig::ui::{MockReporter, Reporter};
//!
//! let mut reporter = MockReporter::new();
//! reporter.message("resolved wallet");
//! reporter.warning("no fork provider set");
//!
//! assert!(reporter.messages()[0].contains("resolved"));
//! assert_eq!(reporter.warnings().len(), 1);
//! ```

use super::{OutputMode, Reporter};

/// Reporter that records every diagnostic instead of printing it.
#[derive(Debug, Default)]
pub struct MockReporter {
    mode: OutputMode,
    messages: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockReporter {
    /// Create a new mock with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new mock with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check whether any captured warning contains the given fragment.
    pub fn warned_about(&self, fragment: &str) -> bool {
        self.warnings.iter().any(|w| w.contains(fragment))
    }
}

impl Reporter for MockReporter {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
