//! Onboarding configuration types
//!
//! These types describe the endpoints, vendor hosts, probe timing and
//! session cache keys used while resolving a download URL.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete onboarding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OnboardingConfig {
    /// Store, vendor and release endpoints
    #[serde(default)]
    pub urls: UrlsConfig,

    /// Hosts recognised as the vendor's own onboarding site
    #[serde(default = "default_vendor_hosts")]
    pub vendor_hosts: Vec<String>,

    /// Network and HTTP configuration
    #[serde(default)]
    pub network: NetworkConfig,

    /// Session cache keys
    #[serde(default)]
    pub session: SessionKeysConfig,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            urls: UrlsConfig::default(),
            vendor_hosts: default_vendor_hosts(),
            network: NetworkConfig::default(),
            session: SessionKeysConfig::default(),
        }
    }
}

impl OnboardingConfig {
    /// Whether `host` is one of the vendor onboarding hosts
    pub fn is_vendor_host(&self, host: &str) -> bool {
        self.vendor_hosts.iter().any(|h| h.eq_ignore_ascii_case(host))
    }
}

/// Endpoint URLs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UrlsConfig {
    /// Chrome Web Store listing, also used as the reachability probe target
    #[serde(default = "default_chrome_store")]
    pub chrome_store: String,

    /// Mozilla add-ons listing
    #[serde(default = "default_firefox_store")]
    pub firefox_store: String,

    /// Vendor landing page
    #[serde(default = "default_vendor_site")]
    pub vendor_site: String,

    /// Human-facing release listing
    #[serde(default = "default_release_page")]
    pub release_page: String,

    /// Release feed API endpoint (JSON array of releases, newest first)
    #[serde(default = "default_release_feed")]
    pub release_feed: String,

    /// Base URL for conventional release archives
    #[serde(default = "default_release_download_base")]
    pub release_download_base: String,
}

impl Default for UrlsConfig {
    fn default() -> Self {
        Self {
            chrome_store: default_chrome_store(),
            firefox_store: default_firefox_store(),
            vendor_site: default_vendor_site(),
            release_page: default_release_page(),
            release_feed: default_release_feed(),
            release_download_base: default_release_download_base(),
        }
    }
}

fn default_chrome_store() -> String {
    "https://chrome.google.com/webstore/detail/conflux-portal/opafkgfpaamecojfkaialabagfofilmg"
        .to_string()
}
fn default_firefox_store() -> String {
    "https://addons.mozilla.org/en-US/firefox/addon/conflux-portal/".to_string()
}
fn default_vendor_site() -> String {
    "https://portal.conflux-chain.org".to_string()
}
fn default_release_page() -> String {
    "https://github.com/Conflux-Chain/conflux-portal/releases".to_string()
}
fn default_release_feed() -> String {
    "https://api.github.com/repos/Conflux-Chain/conflux-portal/releases".to_string()
}
fn default_release_download_base() -> String {
    "https://github.com/Conflux-Chain/conflux-portal/releases/download".to_string()
}
fn default_vendor_hosts() -> Vec<String> {
    vec![
        "portal.conflux-chain.org".to_string(),
        "portal.confluxnetwork.org".to_string(),
    ]
}

/// Network and HTTP configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NetworkConfig {
    /// How long the store probe waits before declaring the store unreachable
    #[serde(default = "default_store_probe_timeout")]
    pub store_probe_timeout_ms: u64,

    /// HTTP timeout for release feed requests, in seconds
    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,

    /// User agent string for HTTP requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl NetworkConfig {
    pub fn store_probe_timeout(&self) -> Duration {
        Duration::from_millis(self.store_probe_timeout_ms)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            store_probe_timeout_ms: default_store_probe_timeout(),
            http_timeout_secs: default_http_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_store_probe_timeout() -> u64 {
    3000
}
fn default_http_timeout() -> u64 {
    30
}
fn default_user_agent() -> String {
    format!("portal-onboarding/{}", env!("CARGO_PKG_VERSION"))
}

/// Keys used in the session-scoped cache
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SessionKeysConfig {
    /// Key holding the resolved download URL
    #[serde(default = "default_download_url_key")]
    pub download_url_key: String,

    /// Key holding the onboarding reentrancy flag
    #[serde(default = "default_in_progress_key")]
    pub in_progress_key: String,
}

impl Default for SessionKeysConfig {
    fn default() -> Self {
        Self {
            download_url_key: default_download_url_key(),
            in_progress_key: default_in_progress_key(),
        }
    }
}

fn default_download_url_key() -> String {
    "PORTAL_DOWNLOAD_URL".to_string()
}
fn default_in_progress_key() -> String {
    "ONBOARDING_IN_PROGRESS".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OnboardingConfig::default();
        assert_eq!(config.network.store_probe_timeout_ms, 3000);
        assert_eq!(config.session.in_progress_key, "ONBOARDING_IN_PROGRESS");
        assert_eq!(config.session.download_url_key, "PORTAL_DOWNLOAD_URL");
        assert_eq!(config.vendor_hosts.len(), 2);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "network:\n  store-probe-timeout-ms: 500\n";
        let config: OnboardingConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.network.store_probe_timeout(), Duration::from_millis(500));
        assert_eq!(config.network.http_timeout_secs, 30);
        assert_eq!(config.urls, UrlsConfig::default());
        assert!(config.is_vendor_host("portal.confluxnetwork.org"));
    }

    #[test]
    fn test_vendor_host_match_is_case_insensitive() {
        let config: OnboardingConfig = serde_yaml_ng::from_str("{}").unwrap();
        assert!(config.is_vendor_host("Portal.Conflux-Chain.org"));
        assert!(!config.is_vendor_host("example.com"));
    }
}
