//! Configuration module

use std::env;
use std::time::Duration;

use crate::constants;

/// Runtime configuration of the guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardConfig {
    /// Classification endpoint (full URL including `/predict`)
    pub endpoint: String,

    /// Timeout for one classification request, in seconds
    pub timeout_secs: u64,

    /// Timeout for one call into the browser, in seconds
    pub host_call_timeout_secs: u64,

    /// Largest message accepted from the browser, in bytes
    pub max_incoming_bytes: usize,

    /// Icon shown on warning notifications
    pub icon_url: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            endpoint: constants::DEFAULT_ENDPOINT.to_string(),
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
            host_call_timeout_secs: constants::DEFAULT_HOST_CALL_TIMEOUT_SECS,
            max_incoming_bytes: constants::DEFAULT_MAX_INCOMING_BYTES,
            icon_url: constants::DEFAULT_ICON.to_string(),
        }
    }
}

impl GuardConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            endpoint: lookup("PHISH_GUARD_ENDPOINT")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.endpoint),

            timeout_secs: lookup("PHISH_GUARD_TIMEOUT_SECS")
                .and_then(|s| s.parse::<u64>().ok())
                .filter(|&secs| secs > 0)
                .unwrap_or(defaults.timeout_secs),

            host_call_timeout_secs: lookup("PHISH_GUARD_HOST_CALL_TIMEOUT_SECS")
                .and_then(|s| s.parse::<u64>().ok())
                .filter(|&secs| secs > 0)
                .unwrap_or(defaults.host_call_timeout_secs),

            max_incoming_bytes: lookup("PHISH_GUARD_MAX_INCOMING_BYTES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_incoming_bytes),

            icon_url: lookup("PHISH_GUARD_ICON")
                .unwrap_or(defaults.icon_url),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn host_call_timeout(&self) -> Duration {
        Duration::from_secs(self.host_call_timeout_secs)
    }
}
