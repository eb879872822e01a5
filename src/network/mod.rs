//! Network connection profiles.
//!
//! - [`profiles`] - the fixed set of named network targets and their
//!   connection settings
//! - [`forking`] - fork-or-fresh decision for the local simulated network

pub mod forking;
pub mod profiles;

pub use forking::{ForkSource, ForkingSettings};
pub use profiles::{
    build_profiles, AccountsSource, NetworkProfile, BSC_MAINNET_CHAIN_ID, BSC_MAINNET_ENDPOINT,
    BSC_NETWORK, BSC_TESTNET_CHAIN_ID, BSC_TESTNET_ENDPOINT, BSC_TESTNET_NETWORK, LOCAL_ENDPOINT,
    LOCAL_NETWORK, SANDBOX_NETWORK,
};
