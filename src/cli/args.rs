//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// chainrig - EVM tool-chain configuration resolver.
#[derive(Debug, Parser)]
#[command(name = "chainrig")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the resolved configuration (default if no command specified)
    Config(ConfigArgs),

    /// List the derived account addresses
    Accounts(AccountsArgs),

    /// List the resolved network profiles
    Networks(NetworksArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Include secret material (mnemonic phrase, raw keys) unmasked
    #[arg(long)]
    pub show_secrets: bool,
}

/// Arguments for the `accounts` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AccountsArgs {
    /// Number of accounts to derive from a mnemonic identity
    #[arg(short, long, default_value_t = 20)]
    pub count: u32,
}

/// Arguments for the `networks` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct NetworksArgs {}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
