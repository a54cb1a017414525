//! Configuration loading from environment variables.

use serde::Deserialize;
use std::env;

/// Runtime configuration for snipbin.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub db_path: String,
    pub port: u16,
    pub max_content_size: usize,
    /// Build https share links (set when running behind TLS termination).
    pub public_https: bool,
    /// Honor the `x-test-now-ms` header when resolving request time.
    pub test_mode: bool,
}

/// Parse a boolean-like environment flag value.
///
/// Truthy: `1`, `true`, `yes`, `on`. Falsy: `0`, `false`, `no`, `off`,
/// empty string. Matching is case-insensitive and ignores whitespace.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

impl Config {
    /// Load configuration from environment variables, with defaults
    /// applied when a variable is missing or unparseable.
    pub fn from_env() -> Self {
        Self {
            db_path: env::var("DB_PATH").unwrap_or_else(|_| "./data/snipbin.db".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            max_content_size: env::var("MAX_CONTENT_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1024 * 1024), // 1MB default
            public_https: env_flag_enabled("PUBLIC_HTTPS"),
            test_mode: env_flag_enabled("TEST_MODE"),
        }
    }

    /// Scheme used when building shareable links.
    pub fn link_scheme(&self) -> &'static str {
        if self.public_https {
            "https"
        } else {
            "http"
        }
    }
}
