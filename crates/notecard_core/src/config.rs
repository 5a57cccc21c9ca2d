//! Remote endpoint configuration.
//!
//! # Responsibility
//! - Assemble the remote base URL from two string environment values.
//! - Decide whether remote mode is enabled at all.
//!
//! # Invariants
//! - Absence (or blank value) of either environment value disables remote
//!   mode entirely; configuration loading never fails.
//! - The assembled base URL carries no trailing slash.

use std::env;

/// Environment value naming the remote host, scheme included.
pub const REMOTE_HOST_ENV: &str = "NOTECARD_REMOTE_HOST";
/// Environment value naming the API path prefix under the host.
pub const REMOTE_PREFIX_ENV: &str = "NOTECARD_REMOTE_PREFIX";

/// Resolved remote endpoint. Its absence means local-only mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    base_url: String,
}

impl RemoteConfig {
    /// Assembles a config from host and path prefix values.
    ///
    /// Returns `None` when either value is blank after trimming, which is
    /// how a deployment opts out of remote mode.
    pub fn from_parts(host: &str, prefix: &str) -> Option<Self> {
        let host = host.trim().trim_end_matches('/');
        let prefix = prefix.trim().trim_matches('/');
        if host.is_empty() || prefix.is_empty() {
            return None;
        }
        Some(Self {
            base_url: format!("{host}/{prefix}"),
        })
    }

    /// Reads [`REMOTE_HOST_ENV`] and [`REMOTE_PREFIX_ENV`] from the process
    /// environment. Unset values behave exactly like blank ones.
    pub fn from_env() -> Option<Self> {
        let host = env::var(REMOTE_HOST_ENV).unwrap_or_default();
        let prefix = env::var(REMOTE_PREFIX_ENV).unwrap_or_default();
        Self::from_parts(&host, &prefix)
    }

    /// Base URL for the notes API, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::RemoteConfig;

    #[test]
    fn assembles_base_url_and_normalizes_slashes() {
        let config = RemoteConfig::from_parts("https://api.example.com/", "/v1/")
            .expect("both parts present");
        assert_eq!(config.base_url(), "https://api.example.com/v1");
    }

    #[test]
    fn missing_or_blank_part_disables_remote_mode() {
        assert!(RemoteConfig::from_parts("", "v1").is_none());
        assert!(RemoteConfig::from_parts("https://api.example.com", "  ").is_none());
        assert!(RemoteConfig::from_parts("   ", "").is_none());
    }
}
