//! Hierarchical configuration loader with precedence
//!
//! Loads configuration from multiple sources with the following precedence (low to high):
//! 1. Embedded defaults (built into binary)
//! 2. User config (~/.portal-onboarding/config.yaml)
//! 3. Environment variables (PORTAL_ONBOARDING_* prefix)
//! 4. CLI flags (handled by caller)

use crate::error::{Error, Result};
use crate::types::OnboardingConfig;
use crate::utils::user_config_dir;
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde_yaml_ng::Value;
use std::env;
use std::fs;
use tracing::debug;

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../embedded/config/"]
#[prefix = ""]
struct EmbeddedConfigs;

const DEFAULTS_FILE: &str = "onboarding-defaults.yaml";
const USER_CONFIG_FILE: &str = "config.yaml";

/// Configuration hierarchy loader
pub struct HierarchicalConfigLoader {
    /// Base directory for configuration files
    config_dir: Utf8PathBuf,
}

impl HierarchicalConfigLoader {
    /// Create a loader rooted at the standard config directory
    pub fn new() -> Result<Self> {
        let config_dir = user_config_dir()?;
        Ok(Self { config_dir })
    }

    /// Create a loader with a custom config directory
    pub fn with_dir(config_dir: Utf8PathBuf) -> Self {
        Self { config_dir }
    }

    /// Directory the user config is read from
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    /// Load onboarding configuration with hierarchical precedence
    pub fn load(&self) -> Result<OnboardingConfig> {
        let mut merged = Self::load_embedded_value(DEFAULTS_FILE)?;

        let user_path = self.config_dir.join(USER_CONFIG_FILE);
        if user_path.exists() {
            debug!("Merging user config from {}", user_path);
            let overlay = self.load_yaml_value(&user_path)?;
            merge_values(&mut merged, overlay);
        }

        let config: OnboardingConfig = serde_yaml_ng::from_value(merged)
            .map_err(|e| Error::invalid_config(format!("Failed to build configuration: {}", e)))?;

        self.apply_env_overrides(config)
    }

    /// Load an embedded configuration file as a YAML value
    fn load_embedded_value(filename: &str) -> Result<Value> {
        let embedded_file = EmbeddedConfigs::get(filename).ok_or_else(|| {
            Error::config_not_found(format!("Embedded config not found: {}", filename))
        })?;

        let content = std::str::from_utf8(&embedded_file.data).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in embedded config: {}", filename))
        })?;

        serde_yaml_ng::from_str(content).map_err(|e| {
            Error::invalid_config(format!(
                "Failed to parse embedded config {}: {}",
                filename, e
            ))
        })
    }

    /// Load a YAML file as a value
    fn load_yaml_value(&self, path: &Utf8Path) -> Result<Value> {
        let content = fs::read_to_string(path)?;
        let value: Value = serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))?;
        // An empty file parses as null and overrides nothing
        Ok(match value {
            Value::Null => Value::Mapping(Default::default()),
            other => other,
        })
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&self, mut config: OnboardingConfig) -> Result<OnboardingConfig> {
        if let Ok(val) = env::var("PORTAL_ONBOARDING_STORE_PROBE_TIMEOUT_MS") {
            config.network.store_probe_timeout_ms = val.parse().map_err(|_| {
                Error::invalid_config(
                    "PORTAL_ONBOARDING_STORE_PROBE_TIMEOUT_MS must be a valid number",
                )
            })?;
        }

        if let Ok(val) = env::var("PORTAL_ONBOARDING_HTTP_TIMEOUT_SECS") {
            config.network.http_timeout_secs = val.parse().map_err(|_| {
                Error::invalid_config("PORTAL_ONBOARDING_HTTP_TIMEOUT_SECS must be a valid number")
            })?;
        }

        if let Ok(val) = env::var("PORTAL_ONBOARDING_USER_AGENT") {
            config.network.user_agent = val;
        }

        if let Ok(val) = env::var("PORTAL_ONBOARDING_RELEASE_FEED_URL") {
            config.urls.release_feed = val;
        }

        if let Ok(val) = env::var("PORTAL_ONBOARDING_VENDOR_HOSTS") {
            let hosts: Vec<String> = val
                .split(',')
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .map(String::from)
                .collect();
            if hosts.is_empty() {
                return Err(Error::invalid_config(
                    "PORTAL_ONBOARDING_VENDOR_HOSTS must list at least one host",
                ));
            }
            config.vendor_hosts = hosts;
        }

        Ok(config)
    }
}

/// Deep-merge `overlay` into `base`; mappings merge key by key, anything else replaces
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
