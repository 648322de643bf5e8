//! Helpers for reading service configuration from environment variables.

use std::str::FromStr;

/// Read a required env var.
///
/// # Panics
///
/// Panics if the variable is missing. Call only during startup.
pub fn required_env(key: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| panic!("missing required env var {key}"))
}

/// Read an optional env var, falling back to `default` when it is missing or
/// does not parse.
pub fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
