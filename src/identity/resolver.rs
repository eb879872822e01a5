//! Identity resolution.
//!
//! Resolves the process-wide signing identity using the fallback chain:
//! 1. `MNEMONIC` (non-empty) — wins even when a private key is also set
//! 2. `PRIVATEKEY` (non-empty)
//! 3. A freshly generated random mnemonic, with an operator warning

use alloy_primitives::Address;
use serde::Serialize;

use super::derive;
use crate::error::Result;
use crate::ui::Reporter;

/// The signing identity, in exactly one of its two forms.
///
/// The network-client layer accepts either a phrase-based derivation object
/// or an explicit list of raw keys, never a mix; keeping the form explicit
/// here lets every profile carry the right one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Identity {
    /// BIP-39 phrase; accounts are derived along m/44'/60'/0'/0/index.
    Mnemonic { phrase: String },
    /// Raw hex secret key used directly for signing.
    SecretKey { key: String },
}

impl Identity {
    /// The mnemonic phrase, if this is the phrase form.
    pub fn phrase(&self) -> Option<&str> {
        match self {
            Self::Mnemonic { phrase } => Some(phrase),
            Self::SecretKey { .. } => None,
        }
    }

    /// The secret material in either form, for output masking.
    pub fn secret(&self) -> &str {
        match self {
            Self::Mnemonic { phrase } => phrase,
            Self::SecretKey { key } => key,
        }
    }

    /// Derive the identity's primary address.
    pub fn address(&self) -> Result<Address> {
        match self {
            Self::Mnemonic { phrase } => derive::phrase_address(phrase, 0),
            Self::SecretKey { key } => Ok(derive::key_signer(key)?.address()),
        }
    }

    /// Derive the account addresses this identity controls.
    ///
    /// A phrase yields the first `count` derivation indices; a raw key
    /// yields its single address regardless of `count`.
    pub fn derive_addresses(&self, count: u32) -> Result<Vec<Address>> {
        match self {
            Self::Mnemonic { phrase } => (0..count)
                .map(|index| derive::phrase_address(phrase, index))
                .collect(),
            Self::SecretKey { key } => Ok(vec![derive::key_signer(key)?.address()]),
        }
    }
}

/// Which branch of the fallback chain produced the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentitySource {
    /// Derived from the supplied `MNEMONIC`.
    Mnemonic,
    /// Derived from the supplied `PRIVATEKEY`.
    PrivateKey,
    /// Derived from a generated random mnemonic.
    GeneratedFallback,
}

impl std::fmt::Display for IdentitySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mnemonic => write!(f, "MNEMONIC"),
            Self::PrivateKey => write!(f, "PRIVATEKEY"),
            Self::GeneratedFallback => write!(f, "generated fallback"),
        }
    }
}

/// A resolved identity with its derived address and provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedIdentity {
    /// The active identity form.
    #[serde(flatten)]
    pub identity: Identity,
    /// Address of the identity's primary account.
    pub address: Address,
    /// How the identity was determined.
    pub source: IdentitySource,
}

impl ResolvedIdentity {
    /// Resolve the identity from environment-sourced inputs.
    ///
    /// Empty strings are treated as unset. Malformed input is a fatal
    /// configuration error. The derived address is always reported for
    /// operator visibility; the random-fallback branch additionally warns
    /// through `reporter`.
    pub fn resolve(
        mnemonic: Option<&str>,
        private_key: Option<&str>,
        reporter: &mut dyn Reporter,
    ) -> Result<Self> {
        let mnemonic = mnemonic.filter(|s| !s.is_empty());
        let private_key = private_key.filter(|s| !s.is_empty());

        // The phrase wins even when a key is also supplied; checking the
        // key first would invert observable behavior.
        let (identity, source) = match (mnemonic, private_key) {
            (Some(phrase), _) => (
                Identity::Mnemonic {
                    phrase: phrase.to_string(),
                },
                IdentitySource::Mnemonic,
            ),
            (None, Some(key)) => (
                Identity::SecretKey {
                    key: key.to_string(),
                },
                IdentitySource::PrivateKey,
            ),
            (None, None) => {
                reporter.warning(
                    "Set MNEMONIC or PRIVATEKEY in your environment or .env file. \
                     Generating a random seed for this run; it is not reproducible \
                     across runs and holds no funds.",
                );
                let phrase = derive::random_phrase()?;
                reporter.warning(&format!("Random mnemonic in use: {}", phrase));
                (
                    Identity::Mnemonic { phrase },
                    IdentitySource::GeneratedFallback,
                )
            }
        };

        let address = identity.address()?;
        reporter.message(&format!("Using wallet with address {}", address));
        tracing::debug!(%address, %source, "resolved signing identity");

        Ok(Self {
            identity,
            address,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockReporter;
    use alloy_primitives::address;

    const TEST_PHRASE: &str = "test test test test test test test test test test test junk";
    // Second derived key of the test phrase, so a precedence inversion
    // would produce a visibly different address.
    const SECOND_KEY: &str = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

    #[test]
    fn mnemonic_wins_over_private_key() {
        let mut reporter = MockReporter::new();
        let resolved =
            ResolvedIdentity::resolve(Some(TEST_PHRASE), Some(SECOND_KEY), &mut reporter).unwrap();

        assert_eq!(resolved.source, IdentitySource::Mnemonic);
        assert_eq!(
            resolved.address,
            address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
    }

    #[test]
    fn empty_mnemonic_falls_through_to_private_key() {
        let mut reporter = MockReporter::new();
        let resolved =
            ResolvedIdentity::resolve(Some(""), Some(SECOND_KEY), &mut reporter).unwrap();

        assert_eq!(resolved.source, IdentitySource::PrivateKey);
        assert_eq!(
            resolved.address,
            address!("70997970C51812dc3A010C7d01b50e0d17dc79C8")
        );
        assert_eq!(resolved.identity.phrase(), None);
    }

    #[test]
    fn missing_inputs_generate_random_fallback() {
        let mut reporter = MockReporter::new();
        let resolved = ResolvedIdentity::resolve(None, None, &mut reporter).unwrap();

        assert_eq!(resolved.source, IdentitySource::GeneratedFallback);
        assert!(resolved.identity.phrase().is_some());
        assert!(reporter.warned_about("MNEMONIC or PRIVATEKEY"));
        assert!(reporter.warned_about("Random mnemonic in use"));
    }

    #[test]
    fn fallback_phrases_differ_across_resolutions() {
        let mut reporter = MockReporter::new();
        let first = ResolvedIdentity::resolve(None, None, &mut reporter).unwrap();
        let second = ResolvedIdentity::resolve(None, None, &mut reporter).unwrap();

        assert_ne!(first.identity.phrase(), second.identity.phrase());
        assert_ne!(first.address, second.address);
    }

    #[test]
    fn address_is_always_reported() {
        let mut reporter = MockReporter::new();
        let resolved =
            ResolvedIdentity::resolve(Some(TEST_PHRASE), None, &mut reporter).unwrap();

        let report = format!("{}", resolved.address);
        assert!(reporter
            .messages()
            .iter()
            .any(|m| m.contains("Using wallet with address") && m.contains(&report)));
    }

    #[test]
    fn no_warnings_when_identity_is_supplied() {
        let mut reporter = MockReporter::new();
        ResolvedIdentity::resolve(Some(TEST_PHRASE), None, &mut reporter).unwrap();
        assert!(reporter.warnings().is_empty());
    }

    #[test]
    fn malformed_mnemonic_is_fatal() {
        let mut reporter = MockReporter::new();
        let err = ResolvedIdentity::resolve(Some("not a real phrase"), None, &mut reporter)
            .unwrap_err();
        assert!(matches!(err, crate::error::Error::InvalidMnemonic { .. }));
    }

    #[test]
    fn malformed_private_key_is_fatal() {
        let mut reporter = MockReporter::new();
        let err = ResolvedIdentity::resolve(None, Some("0xzz"), &mut reporter).unwrap_err();
        assert!(matches!(err, crate::error::Error::InvalidSecretKey { .. }));
    }

    #[test]
    fn derive_addresses_walks_phrase_indices() {
        let identity = Identity::Mnemonic {
            phrase: TEST_PHRASE.to_string(),
        };
        let addrs = identity.derive_addresses(2).unwrap();
        assert_eq!(
            addrs,
            vec![
                address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
                address!("70997970C51812dc3A010C7d01b50e0d17dc79C8"),
            ]
        );
    }

    #[test]
    fn derive_addresses_for_raw_key_is_single() {
        let identity = Identity::SecretKey {
            key: SECOND_KEY.to_string(),
        };
        let addrs = identity.derive_addresses(20).unwrap();
        assert_eq!(addrs.len(), 1);
    }

    #[test]
    fn source_display_names_the_variable() {
        assert_eq!(IdentitySource::Mnemonic.to_string(), "MNEMONIC");
        assert_eq!(IdentitySource::PrivateKey.to_string(), "PRIVATEKEY");
        assert_eq!(
            IdentitySource::GeneratedFallback.to_string(),
            "generated fallback"
        );
    }
}
