//! Download URL resolution
//!
//! Precedence, first match wins:
//! 1. Target already resolved by this resolver
//! 2. URL in the session cache (unless ignored)
//! 3. Firefox store for Firefox; Chrome store for Chrome/Chromium when the
//!    store answers the reachability probe
//! 4. On the vendor's own site: a release asset, falling back to a pinned
//!    archive or the release listing
//! 5. Vendor site

use portal_onboarding_core::{
    detect_browser_family, BrowserFamily, DownloadSource, OnboardingConfig,
    ResolvedDownloadTarget,
};
use portal_onboarding_release::version::LATEST;
use portal_onboarding_release::ArchiveUrlBuilder;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::collaborators::Collaborators;

/// Caller choices that affect resolution
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Neither read nor write the session cache
    pub ignore_session_cache: bool,

    /// Version recommended by an earlier visit, used on the vendor site
    pub cached_recommended_version: Option<String>,

    /// Treat the current page as the vendor site regardless of host
    pub vendor_site_override: bool,
}

/// Resolves the download URL once and remembers it
///
/// Concurrent callers queue on one lock, so a resolution in flight is shared
/// rather than repeated.
pub struct DownloadUrlResolver {
    collaborators: Collaborators,
    config: Arc<OnboardingConfig>,
    options: ResolveOptions,
    archive: ArchiveUrlBuilder,
    resolved: Mutex<Option<ResolvedDownloadTarget>>,
}

impl DownloadUrlResolver {
    pub fn new(
        collaborators: Collaborators,
        config: Arc<OnboardingConfig>,
        options: ResolveOptions,
    ) -> Self {
        let archive = ArchiveUrlBuilder::from_config(&config.urls);
        Self {
            collaborators,
            config,
            options,
            archive,
            resolved: Mutex::new(None),
        }
    }

    /// The resolved target, waiting for a resolution in flight
    pub async fn resolve(&self) -> ResolvedDownloadTarget {
        let mut slot = self.resolved.lock().await;
        if let Some(target) = slot.as_ref() {
            debug!("Using resolved download URL {}", target.url);
            return target.clone();
        }

        let target = match self.from_session_cache() {
            Some(target) => target,
            None => self.resolve_uncached().await,
        };
        self.remember(&mut slot, target)
    }

    /// Resolve again, bypassing both caches, and overwrite them
    pub async fn refresh(&self) -> ResolvedDownloadTarget {
        let mut slot = self.resolved.lock().await;
        let target = self.resolve_uncached().await;
        self.remember(&mut slot, target)
    }

    /// The resolved target if resolution has completed
    pub fn cached(&self) -> Option<ResolvedDownloadTarget> {
        self.resolved.try_lock().ok().and_then(|slot| slot.clone())
    }

    fn from_session_cache(&self) -> Option<ResolvedDownloadTarget> {
        if self.options.ignore_session_cache {
            return None;
        }

        let url = self
            .collaborators
            .session_cache
            .get(&self.config.session.download_url_key)
            .filter(|url| !url.is_empty())?;

        debug!("Using download URL from session cache: {}", url);
        let source = DownloadSource::classify(&url, &self.config.urls);
        Some(ResolvedDownloadTarget::new(url, source))
    }

    fn remember(
        &self,
        slot: &mut Option<ResolvedDownloadTarget>,
        target: ResolvedDownloadTarget,
    ) -> ResolvedDownloadTarget {
        if !self.options.ignore_session_cache {
            self.collaborators
                .session_cache
                .set(&self.config.session.download_url_key, &target.url);
        }
        *slot = Some(target.clone());
        target
    }

    async fn resolve_uncached(&self) -> ResolvedDownloadTarget {
        let user_agent = self.collaborators.environment.user_agent();
        let family = detect_browser_family(self.collaborators.parser.as_ref(), &user_agent);
        let urls = &self.config.urls;

        if family == BrowserFamily::Firefox {
            info!("Firefox detected, using add-ons store");
            return ResolvedDownloadTarget::new(&urls.firefox_store, DownloadSource::StoreFirefox);
        }

        if family.is_chrome_family() {
            let timeout = self.config.network.store_probe_timeout();
            if self.collaborators.store_probe.can_reach_store(timeout).await {
                info!("{} detected and web store reachable", family);
                return ResolvedDownloadTarget::new(&urls.chrome_store, DownloadSource::StoreChrome);
            }
            debug!("Chrome web store unreachable");
        }

        let host = self.collaborators.environment.host();
        if self.options.vendor_site_override || self.config.is_vendor_host(&host) {
            return self.resolve_on_vendor_site(family).await;
        }

        info!("Falling back to vendor site");
        ResolvedDownloadTarget::new(&urls.vendor_site, DownloadSource::VendorSite)
    }

    /// Release lookup for visitors already on the vendor site
    ///
    /// Release errors never escape: they downgrade to the pinned archive URL
    /// when a recommended version is known, else to the release listing.
    async fn resolve_on_vendor_site(&self, family: BrowserFamily) -> ResolvedDownloadTarget {
        let recommended = self.options.cached_recommended_version.as_deref();

        let candidate = recommended.and_then(|version| {
            self.archive
                .build_for_family(family, version)
                .map_err(|e| debug!("Recommended version unusable: {}", e))
                .ok()
        });

        let selector = recommended.unwrap_or(LATEST);
        match self
            .collaborators
            .releases
            .resolve_release_asset_url(family, selector)
            .await
        {
            Ok(url) => ResolvedDownloadTarget::new(url, DownloadSource::ReleaseAsset),
            Err(e) => {
                warn!("Release lookup failed, using fallback: {}", e);
                match candidate {
                    Some(url) => ResolvedDownloadTarget::new(url, DownloadSource::ReleaseAsset),
                    None => ResolvedDownloadTarget::new(
                        &self.config.urls.release_page,
                        DownloadSource::ReleasePage,
                    ),
                }
            }
        }
    }
}
