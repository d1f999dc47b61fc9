//! Environment variable parsing utilities.
//!
//! ```
//! use move_txn_kit::env_utils::{env_var, env_var_or};
//!
//! let max_gas: u64 = env_var_or("MOVE_TXN_DOC_MAX_GAS", 20_000);
//! let price: Option<u64> = env_var("MOVE_TXN_DOC_GAS_UNIT_PRICE");
//! assert_eq!(max_gas, 20_000);
//! assert!(price.is_none());
//! ```

use std::str::FromStr;

/// Parse an environment variable; `None` if unset, empty or unparsable.
pub fn env_var<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .and_then(|v| v.trim().parse().ok())
}

/// Parse an environment variable, falling back to `default`.
pub fn env_var_or<T: FromStr>(key: &str, default: T) -> T {
    env_var(key).unwrap_or(default)
}

/// An environment variable as a string, falling back to `default`.
pub fn env_string_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
