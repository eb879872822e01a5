//! Config command implementation.
//!
//! The `chainrig config` command shows the resolved configuration as JSON.
//! Secret material is masked unless `--show-secrets` is given.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{resolve, EnvInput};
use crate::error::{Error, Result};
use crate::secrets::OutputMasker;
use crate::ui::Reporter;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let env = EnvInput::capture(&self.project_root)?;
        let config = resolve(&env, reporter)?;

        let json = if self.args.compact {
            serde_json::to_string(&config)
        } else {
            serde_json::to_string_pretty(&config)
        }
        .map_err(|e| Error::Other(e.into()))?;

        let rendered = if self.args.show_secrets {
            json
        } else {
            OutputMasker::for_identity(&config.identity.identity).mask(&json)
        };

        reporter.message(&rendered);
        Ok(CommandResult::success())
    }
}
