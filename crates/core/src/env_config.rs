//! Environment variable readers used by [`crate::AppConfig`].
//!
//! Unset variables fall back silently. Set-but-invalid values fall back with a
//! warning so a typo in deployment config shows up in the logs.

use std::fmt::Display;
use std::str::FromStr;

/// Parse `var` as `T`, returning `default` when unset or unparsable.
pub fn env_parse_with_default<T: FromStr + Display>(var: &str, default: T) -> T {
    let Ok(raw) = std::env::var(var) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            tracing::warn!(var, value = %raw, default = %default, "invalid env var value, using default");
            default
        },
    }
}

/// Read `var` as a string, returning `default` when unset or blank.
pub fn env_string_with_default(var: &str, default: &str) -> String {
    std::env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_owned())
}

/// Read `var` as a comma-separated list. Blank entries are dropped.
pub fn env_list(var: &str) -> Vec<String> {
    std::env::var(var)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}
