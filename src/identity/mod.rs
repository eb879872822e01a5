//! Signing identity resolution.
//!
//! The tool-chain signs every deployment and test transaction with a single
//! process-wide identity, resolved once at startup:
//! - [`resolver`] - the mnemonic / private-key / random-fallback chain
//! - [`derive`] - BIP-39/BIP-44 wallet derivation helpers

pub mod derive;
pub mod resolver;

pub use derive::random_phrase;
pub use resolver::{Identity, IdentitySource, ResolvedIdentity};
