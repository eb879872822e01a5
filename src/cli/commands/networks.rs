//! Networks command implementation.
//!
//! The `chainrig networks` command lists the resolved network profiles.

use std::path::{Path, PathBuf};

use crate::cli::args::NetworksArgs;
use crate::config::{resolve, EnvInput};
use crate::error::Result;
use crate::network::{AccountsSource, NetworkProfile};
use crate::ui::Reporter;

use super::dispatcher::{Command, CommandResult};

/// The networks command implementation.
pub struct NetworksCommand {
    project_root: PathBuf,
    #[allow(dead_code)]
    args: NetworksArgs,
}

impl NetworksCommand {
    /// Create a new networks command.
    pub fn new(project_root: &Path, args: NetworksArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

fn describe(profile: &NetworkProfile) -> String {
    let endpoint = profile.endpoint.as_deref().unwrap_or("(in-process)");
    let chain_id = profile
        .chain_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    let accounts = match &profile.accounts {
        AccountsSource::Phrase { .. } => "mnemonic".to_string(),
        AccountsSource::Keys(keys) => format!("{} key(s)", keys.len()),
    };
    let mut line = format!(
        "{:<10} chain_id={:<6} accounts={:<10} {}",
        profile.name, chain_id, accounts, endpoint
    );
    if let Some(fork) = &profile.fork {
        line.push_str(&format!("  [forking {}]", fork.url));
    }
    line
}

impl Command for NetworksCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let env = EnvInput::capture(&self.project_root)?;
        let config = resolve(&env, reporter)?;

        for profile in config.networks.values() {
            reporter.message(&describe(profile));
        }

        Ok(CommandResult::success())
    }
}
