//! Command-line interface for chainrig.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{AccountsArgs, Cli, Commands, CompletionsArgs, ConfigArgs, NetworksArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
