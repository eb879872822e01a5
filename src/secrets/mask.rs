//! Output masking for secret values.
//!
//! The resolved identity's secret material (mnemonic phrase or raw key)
//! ends up inside the exported configuration. Anything rendered for a
//! terminal or a log goes through a masker first.

use crate::identity::Identity;

/// Masks secret values in rendered output.
///
/// # Example
///
/// ```
/// use chainrig::secrets::OutputMasker;
///
/// let mut masker = OutputMasker::new();
/// masker.add_secret("0xdeadbeef");
///
/// let output = masker.mask("accounts: [\"0xdeadbeef\"]");
/// assert_eq!(output, "accounts: [\"[REDACTED]\"]");
/// ```
#[derive(Debug, Default)]
pub struct OutputMasker {
    secrets: Vec<String>,
}

impl OutputMasker {
    const MASK: &'static str = "[REDACTED]";

    /// Create a new masker with nothing registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a masker covering an identity's secret material.
    pub fn for_identity(identity: &Identity) -> Self {
        let mut masker = Self::new();
        masker.add_secret(identity.secret());
        masker
    }

    /// Register a secret value to be masked.
    ///
    /// Empty strings are ignored.
    pub fn add_secret(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.secrets.push(value);
        }
    }

    /// Mask any registered secrets in the given string.
    pub fn mask(&self, input: &str) -> String {
        let mut result = input.to_string();
        for secret in &self.secrets {
            result = result.replace(secret, Self::MASK);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_registered_secret() {
        let mut masker = OutputMasker::new();
        masker.add_secret("super-secret");

        let output = masker.mask("value is super-secret here");
        assert_eq!(output, "value is [REDACTED] here");
    }

    #[test]
    fn masks_every_occurrence() {
        let mut masker = OutputMasker::new();
        masker.add_secret("0xabc");

        let output = masker.mask("0xabc and 0xabc");
        assert!(!output.contains("0xabc"));
    }

    #[test]
    fn ignores_empty_secrets() {
        let mut masker = OutputMasker::new();
        masker.add_secret("");

        assert_eq!(masker.mask("unchanged"), "unchanged");
    }

    #[test]
    fn covers_mnemonic_identity() {
        let identity = Identity::Mnemonic {
            phrase: "alpha bravo charlie".to_string(),
        };
        let masker = OutputMasker::for_identity(&identity);

        let output = masker.mask("{\"mnemonic\":\"alpha bravo charlie\"}");
        assert!(!output.contains("alpha bravo charlie"));
        assert!(output.contains("[REDACTED]"));
    }

    #[test]
    fn covers_raw_key_identity() {
        let identity = Identity::SecretKey {
            key: "0xfeedface".to_string(),
        };
        let masker = OutputMasker::for_identity(&identity);

        assert!(!masker.mask("[\"0xfeedface\"]").contains("0xfeedface"));
    }

    #[test]
    fn passthrough_when_nothing_registered() {
        let masker = OutputMasker::new();
        assert_eq!(masker.mask("anything"), "anything");
    }
}
