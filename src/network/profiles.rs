//! Network profile construction.
//!
//! The tool-chain targets a fixed set of networks. Chain ids are constants:
//! they identify the target chain on the wire and are never resolved
//! dynamically or overridden from the environment.

use std::collections::BTreeMap;

use serde::Serialize;

use super::forking::{ForkSource, ForkingSettings};
use crate::identity::Identity;

/// Local development node.
pub const LOCAL_NETWORK: &str = "local";
/// BNB Smart Chain testnet.
pub const BSC_TESTNET_NETWORK: &str = "bsctest";
/// BNB Smart Chain mainnet.
pub const BSC_NETWORK: &str = "bsc";
/// In-process simulated network used by the test runner.
pub const SANDBOX_NETWORK: &str = "sandbox";

/// Endpoint of the local development node.
pub const LOCAL_ENDPOINT: &str = "http://localhost:8545";
/// Public BSC testnet endpoint.
pub const BSC_TESTNET_ENDPOINT: &str = "https://data-seed-prebsc-1-s1.binance.org:8545";
/// Public BSC mainnet endpoint.
pub const BSC_MAINNET_ENDPOINT: &str = "https://bsc-dataseed.binance.org/";

/// BSC testnet chain id.
pub const BSC_TESTNET_CHAIN_ID: u64 = 97;
/// BSC mainnet chain id.
pub const BSC_MAINNET_CHAIN_ID: u64 = 56;

/// Signing accounts for a network, in the dual representation the
/// network-client layer accepts: a phrase-based derivation object or an
/// explicit raw-key list, never a mix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AccountsSource {
    /// Accounts derived from a mnemonic phrase.
    Phrase { mnemonic: String },
    /// Explicit raw secret keys.
    Keys(Vec<String>),
}

impl AccountsSource {
    /// Project the resolved identity into the form a network profile
    /// carries: the phrase if a mnemonic was resolved, otherwise a
    /// single-element raw-key list.
    pub fn from_identity(identity: &Identity) -> Self {
        match identity {
            Identity::Mnemonic { phrase } => Self::Phrase {
                mnemonic: phrase.clone(),
            },
            Identity::SecretKey { key } => Self::Keys(vec![key.clone()]),
        }
    }
}

/// Connection settings for one named network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkProfile {
    /// Network name; also the key in the profile mapping.
    pub name: String,
    /// RPC endpoint. Absent only for the in-process sandbox.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Fixed chain id, where the target requires one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    /// Signing accounts for transactions on this network.
    pub accounts: AccountsSource,
    /// Live chain the sandbox replays, if forking is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fork: Option<ForkSource>,
}

impl NetworkProfile {
    fn remote(
        name: &str,
        endpoint: &str,
        chain_id: Option<u64>,
        accounts: AccountsSource,
    ) -> Self {
        Self {
            name: name.to_string(),
            endpoint: Some(endpoint.to_string()),
            chain_id,
            accounts,
            fork: None,
        }
    }
}

/// Build the full name→profile mapping.
///
/// Always yields exactly four profiles: `local`, `bsctest`, `bsc`, and the
/// `sandbox` carrying the forking settings. Every profile's accounts trace
/// back to the single resolved identity.
pub fn build_profiles(
    identity: &Identity,
    forking: ForkingSettings,
) -> BTreeMap<String, NetworkProfile> {
    let accounts = AccountsSource::from_identity(identity);

    let mut networks = BTreeMap::new();
    networks.insert(
        LOCAL_NETWORK.to_string(),
        NetworkProfile::remote(LOCAL_NETWORK, LOCAL_ENDPOINT, None, accounts.clone()),
    );
    networks.insert(
        BSC_TESTNET_NETWORK.to_string(),
        NetworkProfile::remote(
            BSC_TESTNET_NETWORK,
            BSC_TESTNET_ENDPOINT,
            Some(BSC_TESTNET_CHAIN_ID),
            accounts.clone(),
        ),
    );
    networks.insert(
        BSC_NETWORK.to_string(),
        NetworkProfile::remote(
            BSC_NETWORK,
            BSC_MAINNET_ENDPOINT,
            Some(BSC_MAINNET_CHAIN_ID),
            accounts,
        ),
    );
    networks.insert(
        SANDBOX_NETWORK.to_string(),
        NetworkProfile {
            name: SANDBOX_NETWORK.to_string(),
            endpoint: None,
            chain_id: None,
            accounts: forking.accounts,
            fork: forking.fork,
        },
    );
    networks
}
