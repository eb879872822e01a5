//! Resolved configuration schema.
//!
//! The exported configuration object is the single source of truth for the
//! surrounding build/test tool-chain. Everything here other than the
//! `networks` mapping and the identity is fixed plumbing: compiler
//! pinning, output locations, and auxiliary tool settings.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::identity::ResolvedIdentity;
use crate::network::NetworkProfile;

/// Pinned compiler settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompilerSettings {
    /// solc version the contracts are compiled with.
    pub version: String,
    /// Optimizer configuration.
    pub optimizer: OptimizerSettings,
    /// Metadata emission configuration.
    pub metadata: MetadataSettings,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            version: "0.8.9".to_string(),
            optimizer: OptimizerSettings {
                enabled: true,
                runs: 800,
            },
            metadata: MetadataSettings {
                bytecode_hash: "none".to_string(),
            },
        }
    }
}

/// solc optimizer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimizerSettings {
    pub enabled: bool,
    pub runs: u32,
}

/// solc metadata configuration.
///
/// `bytecode_hash: none` keeps compiled bytecode reproducible across
/// checkouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataSettings {
    pub bytecode_hash: String,
}

/// Gas-usage reporting settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GasReportSettings {
    /// Enabled when `REPORT_GAS` is present in the environment.
    pub enabled: bool,
    /// Currency gas costs are reported in.
    pub currency: String,
}

impl Default for GasReportSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            currency: "USD".to_string(),
        }
    }
}

/// Contract-verification service settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerificationSettings {
    /// API key passed through to the verification service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Typed contract-binding generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingsSettings {
    /// Directory generated bindings are written to.
    pub out_dir: String,
}

impl Default for BindingsSettings {
    fn default() -> Self {
        Self {
            out_dir: "bindings".to_string(),
        }
    }
}

/// Project directory layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPaths {
    pub artifacts: String,
    pub cache: String,
    pub sources: String,
    pub tests: String,
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self {
            artifacts: "artifacts".to_string(),
            cache: "cache".to_string(),
            sources: "contracts".to_string(),
            tests: "test".to_string(),
        }
    }
}

/// The fully resolved tool-chain configuration.
///
/// Constructed once by [`crate::config::resolve`] and passed by reference
/// into whatever consumes it; immutable for the remainder of the process.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    /// Compiler pinning.
    pub compiler: CompilerSettings,
    /// Name→profile mapping for every network target.
    pub networks: BTreeMap<String, NetworkProfile>,
    /// Gas-usage reporting.
    pub gas_report: GasReportSettings,
    /// Contract verification.
    pub verification: VerificationSettings,
    /// Typed binding generation.
    pub bindings: BindingsSettings,
    /// Project directory layout.
    pub paths: ProjectPaths,
    /// The process-wide signing identity.
    pub identity: ResolvedIdentity,
}
