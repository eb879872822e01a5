//! Forking settings for the local simulated network.
//!
//! The sandbox network either starts from empty state or replays a live
//! chain from an external provider endpoint at its current head block. The
//! decision is made once at resolution time; endpoint reachability is the
//! connection layer's problem, so resolution itself cannot fail.

use serde::Serialize;

use super::profiles::AccountsSource;
use crate::identity::Identity;
use crate::ui::Reporter;

/// A live chain to replay state from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForkSource {
    /// Provider endpoint, used verbatim as supplied.
    pub url: String,
}

/// Settings for the local simulated network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForkingSettings {
    /// Accounts available on the simulated network.
    pub accounts: AccountsSource,
    /// Live chain to fork, if a provider endpoint was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fork: Option<ForkSource>,
}

const WARNING_RULE: &str =
    "........................................................................";

impl ForkingSettings {
    /// Resolve the simulated network's settings.
    ///
    /// `fork_url` present (any value) enables forking with that literal
    /// URL; absent means a fresh in-memory chain, with a warning block
    /// telling the operator how to get realistic forked-chain tests.
    pub fn resolve(
        identity: &Identity,
        fork_url: Option<&str>,
        reporter: &mut dyn Reporter,
    ) -> Self {
        let accounts = AccountsSource::from_identity(identity);

        match fork_url {
            None => {
                reporter.warning(WARNING_RULE);
                reporter.warning(
                    "you need to set CHAINSTACK_PROVIDER to fork the chain and test properly.",
                );
                reporter.warning(WARNING_RULE);
                Self {
                    accounts,
                    fork: None,
                }
            }
            Some(url) => {
                tracing::debug!(url, "sandbox network will fork a live chain");
                Self {
                    accounts,
                    fork: Some(ForkSource {
                        url: url.to_string(),
                    }),
                }
            }
        }
    }
}
