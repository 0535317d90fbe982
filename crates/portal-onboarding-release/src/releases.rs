//! Release feed lookup

use portal_onboarding_core::{BrowserFamily, OnboardingConfig};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{ReleaseError, Result};
use crate::version::VersionSelector;

/// Release information
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Release tag (e.g., "v1.2.3")
    pub tag_name: String,

    /// Release name
    #[serde(default)]
    pub name: Option<String>,

    /// Whether this is a prerelease
    #[serde(default)]
    pub prerelease: bool,

    /// Whether this is a draft
    #[serde(default)]
    pub draft: bool,

    /// Release assets
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,

    /// Published date
    #[serde(default)]
    pub published_at: Option<String>,
}

/// Release asset
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    /// Asset name
    #[serde(default)]
    pub name: Option<String>,

    /// Download URL
    pub browser_download_url: String,
}

/// Pick a release from a newest-first feed
pub fn select_release<'a>(releases: &'a [Release], selector: &VersionSelector) -> Option<&'a Release> {
    match selector {
        VersionSelector::Latest => releases.first(),
        VersionSelector::Exact(version) => {
            releases.iter().find(|r| r.tag_name.contains(version.as_str()))
        }
    }
}

/// Pick the asset built for `family`
pub fn select_asset(release: &Release, family: BrowserFamily) -> Option<&ReleaseAsset> {
    let marker = family.asset_marker();
    release
        .assets
        .iter()
        .find(|a| a.browser_download_url.contains(marker))
}

/// Looks up release assets in the release feed
///
/// Every lookup is a single feed request; nothing is retried or cached.
pub struct ReleaseResolver {
    client: reqwest::Client,
    feed_url: String,
}

impl ReleaseResolver {
    /// Create a resolver for the feed named in `config`
    pub fn new(config: &OnboardingConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.network.user_agent)
            .timeout(config.network.http_timeout())
            .build()
            .map_err(|e| ReleaseError::feed_unavailable(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            feed_url: config.urls.release_feed.clone(),
        })
    }

    /// Point the resolver at a different feed
    pub fn with_feed_url(mut self, feed_url: impl Into<String>) -> Self {
        self.feed_url = feed_url.into();
        self
    }

    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    /// Fetch the full release list, newest first
    pub async fn list_releases(&self) -> Result<Vec<Release>> {
        debug!("Fetching release feed from: {}", self.feed_url);

        let response = self
            .client
            .get(&self.feed_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ReleaseError::feed_unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ReleaseError::feed_unavailable(format!(
                "{} returned {}",
                self.feed_url,
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ReleaseError::feed_unavailable(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| ReleaseError::MalformedFeed(e.to_string()))
    }

    /// Download URL of the asset for `family` in the release picked by `version`
    ///
    /// `version` is `LATEST` or `MAJOR.MINOR.PATCH`; it is validated before any
    /// request is made.
    pub async fn resolve_release_asset_url(
        &self,
        family: BrowserFamily,
        version: &str,
    ) -> Result<String> {
        let selector: VersionSelector = version.parse()?;
        let releases = self.list_releases().await?;

        let release = select_release(&releases, &selector).ok_or_else(|| {
            ReleaseError::VersionNotFound {
                version: selector.to_string(),
            }
        })?;

        let asset = select_asset(release, family).ok_or_else(|| ReleaseError::AssetNotFound {
            tag: release.tag_name.clone(),
            marker: family.asset_marker().to_string(),
        })?;

        info!(
            "Resolved {} asset for {}: {}",
            release.tag_name, family, asset.browser_download_url
        );
        Ok(asset.browser_download_url.clone())
    }
}
