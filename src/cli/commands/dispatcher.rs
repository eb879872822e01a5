//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, ConfigArgs};
use crate::error::Result;
use crate::ui::Reporter;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `reporter` - Sink for output and diagnostics
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation.
    /// With no subcommand, shows the resolved configuration.
    pub fn dispatch(&self, cli: &Cli, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Config(args)) => {
                let cmd = super::config::ConfigCommand::new(&self.project_root, args.clone());
                cmd.execute(reporter)
            }
            Some(Commands::Accounts(args)) => {
                let cmd = super::accounts::AccountsCommand::new(&self.project_root, args.clone());
                cmd.execute(reporter)
            }
            Some(Commands::Networks(args)) => {
                let cmd = super::networks::NetworksCommand::new(&self.project_root, args.clone());
                cmd.execute(reporter)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(reporter)
            }
            None => {
                let cmd =
                    super::config::ConfigCommand::new(&self.project_root, ConfigArgs::default());
                cmd.execute(reporter)
            }
        }
    }
}
