//! Accounts command implementation.
//!
//! The `chainrig accounts` command prints the account addresses the
//! resolved identity controls, one per line.

use std::path::{Path, PathBuf};

use crate::cli::args::AccountsArgs;
use crate::config::{resolve, EnvInput};
use crate::error::Result;
use crate::ui::Reporter;

use super::dispatcher::{Command, CommandResult};

/// The accounts command implementation.
pub struct AccountsCommand {
    project_root: PathBuf,
    args: AccountsArgs,
}

impl AccountsCommand {
    /// Create a new accounts command.
    pub fn new(project_root: &Path, args: AccountsArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for AccountsCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let env = EnvInput::capture(&self.project_root)?;
        let config = resolve(&env, reporter)?;

        for address in config.identity.identity.derive_addresses(self.args.count)? {
            reporter.message(&address.to_string());
        }

        Ok(CommandResult::success())
    }
}
