//! Dashboard Configuration
//!
//! Backend location, issue-tracker link target, storage key and timing.
//! Values start from defaults and are overridden through a key lookup so
//! the web build can feed it compile-time environment.

use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const ENV_API_URL: &str = "DASHBOARD_API_URL";
pub const ENV_TRACKER_URL: &str = "DASHBOARD_TRACKER_URL";
pub const ENV_POLL_SECS: &str = "DASHBOARD_POLL_SECS";
pub const ENV_REFRESH_DELAY_SECS: &str = "DASHBOARD_REFRESH_DELAY_SECS";
pub const ENV_LOG_LEVEL: &str = "DASHBOARD_LOG_LEVEL";

pub const DEFAULT_TRACKER_URL: &str = "https://coverwallet.atlassian.net";
pub const DEFAULT_AUTH_STORAGE_KEY: &str = "dashboard_auth";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5 * 60);
pub const DEFAULT_REFRESH_SETTLE_DELAY: Duration = Duration::from_secs(3);

/// Characters `encodeURIComponent` leaves untouched besides alphanumerics
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Backend base URL; empty means same origin
    pub api_base_url: String,
    /// Issue tracker root, issues link to `<root>/browse/<key>`
    pub tracker_base_url: String,
    pub auth_storage_key: String,
    pub poll_interval: Duration,
    /// Wait between triggering backend recomputation and re-fetching
    pub refresh_settle_delay: Duration,
    pub log_level: LevelFilter,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            tracker_base_url: DEFAULT_TRACKER_URL.to_string(),
            auth_storage_key: DEFAULT_AUTH_STORAGE_KEY.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            refresh_settle_delay: DEFAULT_REFRESH_SETTLE_DELAY,
            log_level: LevelFilter::Info,
        }
    }
}

impl DashboardConfig {
    /// Build from defaults plus whatever `lookup` knows about.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            config.api_base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(url) = lookup(ENV_TRACKER_URL).filter(|u| !u.trim().is_empty()) {
            config.tracker_base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(secs) = parse_setting::<u64>(&lookup, ENV_POLL_SECS).filter(|s| *s > 0) {
            config.poll_interval = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_setting::<u64>(&lookup, ENV_REFRESH_DELAY_SECS) {
            config.refresh_settle_delay = Duration::from_secs(secs);
        }
        if let Some(level) = parse_setting::<LevelFilter>(&lookup, ENV_LOG_LEVEL) {
            config.log_level = level;
        }

        config
    }

    /// Absolute (or same-origin) URL of a backend path such as `/dashboard`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }

    /// Login URL; the backend expects the password as a query parameter.
    pub fn login_url(&self, password: &str) -> String {
        format!(
            "{}?password={}",
            self.endpoint("/auth/login"),
            utf8_percent_encode(password, URI_COMPONENT)
        )
    }

    pub fn issue_url(&self, issue_key: &str) -> String {
        format!("{}/browse/{}", self.tracker_base_url, issue_key)
    }
}

fn parse_setting<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("[CONFIG] ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::from_lookup(|_| None);
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.endpoint("/dashboard"), "/dashboard");
        assert_eq!(config.poll_interval, Duration::from_secs(300));
        assert_eq!(config.refresh_settle_delay, Duration::from_secs(3));
        assert_eq!(config.auth_storage_key, "dashboard_auth");
    }

    #[test]
    fn test_overrides() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            (ENV_API_URL, "https://api.example.com/"),
            (ENV_TRACKER_URL, "https://tracker.example.com"),
            (ENV_POLL_SECS, "60"),
            (ENV_LOG_LEVEL, "debug"),
        ]));
        assert_eq!(config.endpoint("issues"), "https://api.example.com/issues");
        assert_eq!(config.issue_url("EPIC-12"), "https://tracker.example.com/browse/EPIC-12");
        assert_eq!(config.poll_interval, Duration::from_secs(60));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values_ignored() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            (ENV_POLL_SECS, "soon"),
            (ENV_REFRESH_DELAY_SECS, "-1"),
            (ENV_LOG_LEVEL, "loud"),
        ]));
        assert_eq!(config.poll_interval, DEFAULT_POLL_INTERVAL);
        assert_eq!(config.refresh_settle_delay, DEFAULT_REFRESH_SETTLE_DELAY);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_login_url_encodes_like_uri_component() {
        let config = DashboardConfig::default();
        assert_eq!(
            config.login_url("p@ss word&x=1!"),
            "/auth/login?password=p%40ss%20word%26x%3D1!"
        );
    }

    #[test]
    fn test_default_issue_url() {
        let config = DashboardConfig::default();
        assert_eq!(
            config.issue_url("EPIC-1"),
            "https://coverwallet.atlassian.net/browse/EPIC-1"
        );
    }
}
