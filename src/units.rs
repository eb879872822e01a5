//! Numeric unit helpers for tests and deployment scripts.
//!
//! Token amounts live on-chain as fixed-point integers; these helpers
//! convert between human-readable quantities and their wire representation.

use alloy_primitives::utils::{format_ether, parse_units};
use alloy_primitives::U256;

use crate::error::{Error, Result};

/// Expand a whole-token amount to its 18-decimal representation.
pub fn expand_to_18_decimals(n: u64) -> U256 {
    U256::from(n) * U256::from(10u64).pow(U256::from(18u64))
}

/// Parse a decimal string as a 9-decimal quantity.
pub fn expand_to_9_decimals(value: &str) -> Result<U256> {
    let parsed = parse_units(value, 9).map_err(|e| Error::InvalidUnits {
        value: value.to_string(),
        message: e.to_string(),
    })?;
    Ok(parsed.get_absolute())
}

/// Lossy conversion of a wei amount to a float, for display and
/// approximate assertions only.
pub fn ether_to_float(wei: U256) -> f64 {
    format_ether(wei).parse().unwrap_or(0.0)
}

/// Convert whole days to seconds.
pub fn days_to_secs(days: u64) -> u64 {
    days * 24 * 60 * 60
}
