//! Configuration capture, resolution, and schema.
//!
//! This module handles all aspects of configuration:
//! - Environment capture in [`environment`] (layered over `.env` via
//!   [`env_layer`] and [`env_file`])
//! - The composed resolution entry point in [`resolver`]
//! - The exported configuration object in [`schema`]
//!
//! # Example
//!
//! ```
//! use chainrig::config::{resolve, EnvInput};
//! use chainrig::ui::MockReporter;
//!
//! let env = EnvInput {
//!     mnemonic: Some(
//!         "test test test test test test test test test test test junk".to_string(),
//!     ),
//!     ..Default::default()
//! };
//! let mut reporter = MockReporter::new();
//! let config = resolve(&env, &mut reporter).unwrap();
//! assert!(config.networks.contains_key("sandbox"));
//! ```

pub mod env_file;
pub mod env_layer;
pub mod environment;
pub mod resolver;
pub mod schema;

// Environment re-exports
pub use environment::{
    load_system_env, EnvInput, ETHERSCAN_API_KEY_VAR, FORK_PROVIDER_VAR, MNEMONIC_VAR,
    PRIVATE_KEY_VAR, REPORT_GAS_VAR,
};

// Env file re-exports
pub use env_file::{load_env_file, load_env_file_optional};

// Env layer re-exports
pub use env_layer::{EnvLayer, EnvLayerStack};

// Resolver re-exports
pub use resolver::resolve;

// Schema re-exports
pub use schema::{
    BindingsSettings, CompilerSettings, GasReportSettings, MetadataSettings, OptimizerSettings,
    ProjectPaths, ResolvedConfig, VerificationSettings,
};
