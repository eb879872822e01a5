//! Configuration resolution.
//!
//! Composes the three resolution steps in order: identity first (its
//! output feeds every network profile), then the forking decision for the
//! sandbox network, then the profile mapping. Runs synchronously with no
//! suspension points; the result is immutable.

use super::environment::EnvInput;
use super::schema::{
    BindingsSettings, CompilerSettings, GasReportSettings, ProjectPaths, ResolvedConfig,
    VerificationSettings,
};
use crate::error::Result;
use crate::identity::ResolvedIdentity;
use crate::network::{build_profiles, ForkingSettings};
use crate::ui::Reporter;

/// Resolve the full tool-chain configuration from captured environment
/// input.
///
/// # Errors
///
/// Fails only on fatal configuration errors (malformed identity input);
/// missing inputs degrade with operator warnings instead.
///
/// # Example
///
/// ```
/// use chainrig::config::{resolve, EnvInput};
/// use chainrig::ui::MockReporter;
///
/// let env = EnvInput {
///     private_key: Some(
///         "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80".to_string(),
///     ),
///     ..Default::default()
/// };
/// let mut reporter = MockReporter::new();
/// let config = resolve(&env, &mut reporter).unwrap();
/// assert_eq!(config.networks.len(), 4);
/// ```
pub fn resolve(env: &EnvInput, reporter: &mut dyn Reporter) -> Result<ResolvedConfig> {
    let identity = ResolvedIdentity::resolve(
        env.mnemonic.as_deref(),
        env.private_key.as_deref(),
        reporter,
    )?;

    let forking = ForkingSettings::resolve(
        &identity.identity,
        env.fork_provider_url.as_deref(),
        reporter,
    );

    let networks = build_profiles(&identity.identity, forking);

    Ok(ResolvedConfig {
        compiler: CompilerSettings::default(),
        networks,
        gas_report: GasReportSettings {
            enabled: env.report_gas,
            ..Default::default()
        },
        verification: VerificationSettings {
            api_key: env.etherscan_api_key.clone(),
        },
        bindings: BindingsSettings::default(),
        paths: ProjectPaths::default(),
        identity,
    })
}
