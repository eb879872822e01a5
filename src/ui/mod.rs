//! Operator-facing output components.
//!
//! This module provides:
//! - [`Reporter`] trait abstracting diagnostic output
//! - [`ConsoleReporter`] for terminal usage
//! - [`MockReporter`] for asserting on emitted diagnostics in tests
//!
//! All resolver warnings flow through a [`Reporter`]; nothing in the
//! resolution core prints directly.
//!
//! # Example
//!
//! ```
//! use chainrig::ui::{MockReporter, Reporter};
//!
//! let mut reporter = MockReporter::new();
//! reporter.warning("something is off");
//! assert_eq!(reporter.warnings(), ["something is off"]);
//! ```

pub mod mock;
pub mod terminal;

pub use mock::MockReporter;
pub use terminal::ConsoleReporter;

use std::str::FromStr;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including per-step detail.
    Verbose,
    /// Show status and warnings.
    #[default]
    Normal,
    /// Show nothing except errors.
    Quiet,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Check if this mode shows status messages and warnings.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

/// Trait for diagnostic output.
///
/// This trait allows capturing resolver diagnostics in tests.
pub trait Reporter {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display an informational message.
    fn message(&mut self, msg: &str);

    /// Display a warning. Warnings are advisory; resolution continues.
    fn warning(&mut self, msg: &str);

    /// Display an error.
    fn error(&mut self, msg: &str);
}
