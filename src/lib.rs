//! chainrig - Configuration resolver for an EVM development tool-chain.
//!
//! chainrig reads identity and network settings from the environment once at
//! startup and resolves them into the single configuration object the
//! surrounding build/test tool-chain consumes: which wallet signs, which
//! networks are reachable, and whether the local sandbox network forks a
//! live chain.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Environment capture, resolution, and the exported schema
//! - [`error`] - Error types and result aliases
//! - [`identity`] - Signing-identity resolution and wallet derivation
//! - [`network`] - Network profiles and the forking decision
//! - [`secrets`] - Secret masking for rendered output
//! - [`ui`] - Diagnostic reporting (terminal and mock)
//! - [`units`] - Numeric unit helpers for tests and scripts
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
//!
//! assert_eq!(config.networks["bsc"].chain_id, Some(56));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod identity;
pub mod network;
pub mod secrets;
pub mod ui;
pub mod units;

pub use error::{Error, Result};
