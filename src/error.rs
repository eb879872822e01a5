//! Error types for chainrig operations.
//!
//! This module defines [`Error`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `Error` for configuration errors that need distinct handling
//! - Use `anyhow::Error` (via `Error::Other`) for unexpected errors
//! - Malformed identity input is fatal: resolution aborts before any
//!   network profile is built

use std::path::PathBuf;
use thiserror::Error as ThisError;

/// Core error type for chainrig operations.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The supplied mnemonic phrase could not be used for derivation.
    #[error("Invalid mnemonic: {message}")]
    InvalidMnemonic { message: String },

    /// The supplied raw secret key could not be used for derivation.
    #[error("Invalid secret key: {message}")]
    InvalidSecretKey { message: String },

    /// Generating a random fallback mnemonic failed.
    #[error("Failed to generate mnemonic: {message}")]
    MnemonicGeneration { message: String },

    /// Failed to parse a dotenv-style environment file.
    #[error("Failed to parse env file at {path}: {message}")]
    EnvFileParse { path: PathBuf, message: String },

    /// A numeric unit conversion failed.
    #[error("Invalid unit value '{value}': {message}")]
    InvalidUnits { value: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for chainrig operations.
pub type Result<T> = std::result::Result<T, Error>;
