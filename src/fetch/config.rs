//! Fetch configuration.
//!
//! Configuration is an explicit value handed to
//! [`FetchClient::new`](super::FetchClient::new) — set once, read many. There
//! is no process-wide mutable state, so concurrent fetches can share a client
//! (or clones of it) without coordinating configuration changes.

use crate::user_agent;

use super::constants::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_MAX_REDIRECTS,
};

/// How redirects are followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedirectMode {
    /// Delegate redirect following to the transport. One transaction per
    /// fetch; the transport sets a referer on each hop.
    #[default]
    Native,
    /// Follow redirects at the application level, one hop at a time. For
    /// hosting environments or proxies where transport auto-follow is
    /// disabled by policy.
    Manual,
}

/// Fetch-wide configuration: identity, timeouts, and the redirect ceiling.
///
/// Timeouts apply per hop, not across a whole redirect chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// User-Agent sent on every transaction.
    pub user_agent: String,
    /// Maximum number of redirect hops before aborting.
    pub max_redirects: u32,
    /// TCP/TLS connect timeout per transaction, in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout per transaction, in seconds.
    pub fetch_timeout_secs: u64,
    /// Native or manual redirect following.
    pub redirect_mode: RedirectMode,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: user_agent::default_fetch_user_agent(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            redirect_mode: RedirectMode::default(),
        }
    }
}

impl FetchConfig {
    /// Creates a configuration with library defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the User-Agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Replaces the redirect ceiling.
    #[must_use]
    pub fn with_max_redirects(mut self, max_redirects: u32) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// Replaces both per-hop timeouts.
    #[must_use]
    pub fn with_timeouts(mut self, connect_timeout_secs: u64, fetch_timeout_secs: u64) -> Self {
        self.connect_timeout_secs = connect_timeout_secs;
        self.fetch_timeout_secs = fetch_timeout_secs;
        self
    }

    /// Selects native or manual redirect following.
    #[must_use]
    pub fn with_redirect_mode(mut self, redirect_mode: RedirectMode) -> Self {
        self.redirect_mode = redirect_mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = FetchConfig::default();
        assert_eq!(config.max_redirects, 10);
        assert_eq!(config.connect_timeout_secs, 30);
        assert_eq!(config.fetch_timeout_secs, 30);
        assert_eq!(config.redirect_mode, RedirectMode::Native);
        assert!(
            config.user_agent.starts_with("pagefetch/"),
            "default UA should identify the crate: {}",
            config.user_agent
        );
    }

    #[test]
    fn test_builder_setters_compose() {
        let config = FetchConfig::new()
            .with_user_agent("custom-agent/1.0")
            .with_max_redirects(3)
            .with_timeouts(5, 15)
            .with_redirect_mode(RedirectMode::Manual);
        assert_eq!(config.user_agent, "custom-agent/1.0");
        assert_eq!(config.max_redirects, 3);
        assert_eq!(config.connect_timeout_secs, 5);
        assert_eq!(config.fetch_timeout_secs, 15);
        assert_eq!(config.redirect_mode, RedirectMode::Manual);
    }
}
