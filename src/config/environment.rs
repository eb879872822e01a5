//! Environment input capture.
//!
//! All environment variables the tool-chain consumes are read exactly once,
//! at process start, into an [`EnvInput`] snapshot. Resolution functions
//! take the snapshot (or individual fields) by reference; nothing else in
//! the crate touches `std::env`.

use std::collections::HashMap;
use std::path::Path;

use crate::config::env_file::load_env_file_optional;
use crate::config::env_layer::{EnvLayer, EnvLayerStack};
use crate::error::Result;

/// Selects mnemonic-based identity derivation when set and non-empty.
pub const MNEMONIC_VAR: &str = "MNEMONIC";
/// Raw secret key, used only if the mnemonic is unset or empty.
pub const PRIVATE_KEY_VAR: &str = "PRIVATEKEY";
/// External endpoint used to fork a live chain for local testing.
pub const FORK_PROVIDER_VAR: &str = "CHAINSTACK_PROVIDER";
/// Presence (any value) enables gas-usage reporting.
pub const REPORT_GAS_VAR: &str = "REPORT_GAS";
/// Passed through to the contract-verification service.
pub const ETHERSCAN_API_KEY_VAR: &str = "ETHERSCAN_API_KEY";

/// Snapshot of the environment variables consumed by the tool-chain.
///
/// Fields record raw presence; emptiness policy (e.g. an empty `MNEMONIC`
/// falling through to `PRIVATEKEY`) belongs to the resolvers.
#[derive(Debug, Clone, Default)]
pub struct EnvInput {
    /// Raw `MNEMONIC` value, if the variable is present.
    pub mnemonic: Option<String>,
    /// Raw `PRIVATEKEY` value, if the variable is present.
    pub private_key: Option<String>,
    /// Raw `CHAINSTACK_PROVIDER` value, if the variable is present.
    pub fork_provider_url: Option<String>,
    /// Whether `REPORT_GAS` is present at all.
    pub report_gas: bool,
    /// Raw `ETHERSCAN_API_KEY` value, if the variable is present.
    pub etherscan_api_key: Option<String>,
}

impl EnvInput {
    /// Capture the environment for a project.
    ///
    /// Reads `<project_root>/.env` if present and layers the process
    /// environment on top of it, so exported variables win over file
    /// entries.
    pub fn capture(project_root: &Path) -> Result<Self> {
        let mut stack = EnvLayerStack::new();

        let env_path = project_root.join(".env");
        let file_vars = load_env_file_optional(&env_path)?;
        stack.push(EnvLayer::from_map(env_path.display().to_string(), file_vars));
        stack.push(EnvLayer::from_map("process env", load_system_env()));

        Ok(Self::from_stack(&stack))
    }

    /// Build a snapshot from an already-assembled layer stack.
    ///
    /// This is the pure constructor used by tests; `capture` wires it to
    /// the real process environment.
    pub fn from_stack(stack: &EnvLayerStack) -> Self {
        Self {
            mnemonic: stack.get(MNEMONIC_VAR).map(str::to_string),
            private_key: stack.get(PRIVATE_KEY_VAR).map(str::to_string),
            fork_provider_url: stack.get(FORK_PROVIDER_VAR).map(str::to_string),
            report_gas: stack.get(REPORT_GAS_VAR).is_some(),
            etherscan_api_key: stack.get(ETHERSCAN_API_KEY_VAR).map(str::to_string),
        }
    }
}

/// Load environment variables from the process.
pub fn load_system_env() -> HashMap<String, String> {
    std::env::vars().collect()
}
