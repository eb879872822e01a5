//! Wallet derivation helpers.
//!
//! Thin wrappers over the alloy local-signer stack. Derivation failures are
//! fatal configuration errors: a malformed phrase or key aborts resolution
//! before any network profile is built.

use alloy_primitives::Address;
use alloy_signer_local::{MnemonicBuilder, PrivateKeySigner};
use coins_bip39::{English, Mnemonic};

use crate::error::{Error, Result};

/// Word count for generated fallback phrases.
const RANDOM_PHRASE_WORDS: usize = 12;

/// Derive the signer at `index` of the standard Ethereum derivation path
/// (m/44'/60'/0'/0/index) for a mnemonic phrase.
pub fn phrase_signer(phrase: &str, index: u32) -> Result<PrivateKeySigner> {
    MnemonicBuilder::<English>::default()
        .phrase(phrase)
        .index(index)
        .map_err(|e| Error::InvalidMnemonic {
            message: e.to_string(),
        })?
        .build()
        .map_err(|e| Error::InvalidMnemonic {
            message: e.to_string(),
        })
}

/// Build a signer directly from a raw hex secret key (with or without the
/// `0x` prefix).
pub fn key_signer(key: &str) -> Result<PrivateKeySigner> {
    key.parse::<PrivateKeySigner>()
        .map_err(|e| Error::InvalidSecretKey {
            message: e.to_string(),
        })
}

/// Derive the address at `index` for a mnemonic phrase.
pub fn phrase_address(phrase: &str, index: u32) -> Result<Address> {
    Ok(phrase_signer(phrase, index)?.address())
}

/// Generate a cryptographically random BIP-39 phrase.
pub fn random_phrase() -> Result<String> {
    let mut rng = rand::thread_rng();
    let mnemonic = Mnemonic::<English>::new_with_count(&mut rng, RANDOM_PHRASE_WORDS).map_err(
        |e| Error::MnemonicGeneration {
            message: e.to_string(),
        },
    )?;
    Ok(mnemonic.to_phrase())
}
