//! Conventional release archive URLs
//!
//! Archives are published as
//! `{base}/v{version}/conflux-portal-{browser}-{version}.zip`, so a caller that
//! already knows the version can skip the feed round trip entirely.

use portal_onboarding_core::types::UrlsConfig;
use portal_onboarding_core::BrowserFamily;

use crate::error::{ReleaseError, Result};
use crate::version::VersionSelector;
use crate::ARCHIVE_PREFIX;

/// Browser tags that have a published archive
const ARCHIVE_BROWSERS: [&str; 2] = ["chrome", "firefox"];

/// Builds archive URLs against a configurable download base
#[derive(Debug, Clone)]
pub struct ArchiveUrlBuilder {
    base: String,
}

impl ArchiveUrlBuilder {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn from_config(urls: &UrlsConfig) -> Self {
        Self::new(urls.release_download_base.clone())
    }

    /// Archive URL for a browser tag (`chrome` or `firefox`) and exact version
    pub fn build(&self, browser: &str, version: &str) -> Result<String> {
        let browser = ARCHIVE_BROWSERS
            .iter()
            .find(|b| b.eq_ignore_ascii_case(browser))
            .ok_or_else(|| ReleaseError::invalid_browser(browser))?;
        let version = VersionSelector::parse_exact(version)?;

        Ok(format!(
            "{}/v{version}/{ARCHIVE_PREFIX}-{browser}-{version}.zip",
            self.base.trim_end_matches('/'),
        ))
    }

    /// Archive URL for a detected browser family
    pub fn build_for_family(&self, family: BrowserFamily, version: &str) -> Result<String> {
        self.build(family.archive_tag(), version)
    }
}

impl Default for ArchiveUrlBuilder {
    fn default() -> Self {
        Self::from_config(&UrlsConfig::default())
    }
}

/// Archive URL using the default download base
pub fn build_release_zip_url(browser: &str, version: &str) -> Result<String> {
    ArchiveUrlBuilder::default().build(browser, version)
}
