//! Onboarding session controller

use anyhow::Result;
use portal_onboarding_core::adapters::UrlOpener;
use portal_onboarding_core::{
    onboarding_state, OnboardingConfig, OnboardingState, ResolvedDownloadTarget,
};
use std::sync::{Arc, Weak};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::collaborators::Collaborators;
use crate::resolver::{DownloadUrlResolver, ResolveOptions};

const FLAG_SET: &str = "true";
const FLAG_CLEAR: &str = "false";

/// Options accepted when a session is created
#[derive(Debug, Clone)]
pub struct OnboardingOptions {
    /// Neither read nor write the session cache
    pub ignore_session_cache: bool,

    /// Version recommended by an earlier visit
    pub cached_recommended_version: Option<String>,

    /// Install the compatibility shim when the extension is missing
    pub inject_shim: bool,

    /// Treat the current page as the vendor site regardless of host
    pub vendor_site_override: bool,
}

impl Default for OnboardingOptions {
    fn default() -> Self {
        Self {
            ignore_session_cache: false,
            cached_recommended_version: None,
            inject_shim: true,
            vendor_site_override: false,
        }
    }
}

impl OnboardingOptions {
    fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            ignore_session_cache: self.ignore_session_cache,
            cached_recommended_version: self.cached_recommended_version.clone(),
            vendor_site_override: self.vendor_site_override,
        }
    }
}

struct SessionInner {
    state: OnboardingState,
    collaborators: Collaborators,
    config: Arc<OnboardingConfig>,
    resolver: DownloadUrlResolver,
}

impl SessionInner {
    /// Whether the opener accepted the URL
    async fn open_download_page(&self) -> bool {
        let target = self.resolver.resolve().await;
        info!("Opening download page {}", target);
        match self.collaborators.opener.open(&target.url).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to open {}: {:#}", target.url, e);
                false
            }
        }
    }
}

/// Public entry point for embedding pages
///
/// The extension state is read once at construction and never revisited.
/// When the extension is missing, resolution of the download URL starts
/// immediately in the background. Cloning is cheap and clones share state.
#[derive(Clone)]
pub struct OnboardingSession {
    inner: Arc<SessionInner>,
}

impl OnboardingSession {
    /// Create a session; must be called from within a tokio runtime for the
    /// background resolution to start
    pub fn new(
        collaborators: Collaborators,
        config: Arc<OnboardingConfig>,
        options: OnboardingOptions,
    ) -> Self {
        let state = onboarding_state(collaborators.environment.as_ref());
        let resolver =
            DownloadUrlResolver::new(collaborators.clone(), config.clone(), options.resolve_options());

        let session = Self {
            inner: Arc::new(SessionInner {
                state,
                collaborators,
                config,
                resolver,
            }),
        };

        if state == OnboardingState::Installed {
            debug!("Extension already installed, nothing to onboard");
            return session;
        }

        match Handle::try_current() {
            Ok(handle) => {
                let inner = session.inner.clone();
                handle.spawn(async move {
                    inner.resolver.resolve().await;
                });
            }
            Err(_) => debug!("No runtime, download URL resolves on first use"),
        }

        if options.inject_shim {
            session.inject_compatibility_shim();
        }

        session
    }

    pub fn state(&self) -> OnboardingState {
        self.inner.state
    }

    pub fn is_installed(&self) -> bool {
        self.inner.state == OnboardingState::Installed
    }

    /// Open the download page unless onboarding is already in progress
    ///
    /// Returns the handle of the open action, or `None` when nothing was
    /// started (extension installed, flag already set, or no runtime). The
    /// handle yields `false` when the opener failed; the failure is logged
    /// and goes no further.
    ///
    /// The in-progress flag is cleared as soon as the open action is
    /// scheduled, not when it completes, so a call arriving while the first
    /// open is still pending starts a second one.
    pub fn start_onboarding(&self) -> Option<JoinHandle<bool>> {
        if self.is_installed() {
            debug!("Extension installed, onboarding not started");
            return None;
        }

        let cache = &self.inner.collaborators.session_cache;
        let key = &self.inner.config.session.in_progress_key;
        if cache.get(key).as_deref() == Some(FLAG_SET) {
            debug!("Onboarding already in progress");
            return None;
        }

        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                warn!("Onboarding requested outside a tokio runtime");
                return None;
            }
        };

        cache.set(key, FLAG_SET);
        let inner = self.inner.clone();
        let open = handle.spawn(async move { inner.open_download_page().await });
        cache.set(key, FLAG_CLEAR);

        Some(open)
    }

    /// The resolved download target, waiting for resolution in flight
    pub async fn download_url(&self) -> ResolvedDownloadTarget {
        self.inner.resolver.resolve().await
    }

    /// Resolve the download target again, bypassing caches
    pub async fn refresh_download_url(&self) -> ResolvedDownloadTarget {
        self.inner.resolver.refresh().await
    }

    /// Put a stand-in for the extension's entry point into the environment
    ///
    /// Calling the stand-in starts onboarding. Does nothing and returns
    /// `false` when the extension is installed.
    pub fn inject_compatibility_shim(&self) -> bool {
        if self.is_installed() {
            return false;
        }

        let session: Weak<SessionInner> = Arc::downgrade(&self.inner);
        self.inner
            .collaborators
            .environment
            .install_shim(Arc::new(move || {
                if let Some(inner) = session.upgrade() {
                    OnboardingSession { inner }.start_onboarding();
                }
            }));

        debug!("Compatibility shim installed");
        true
    }

    /// Open the vendor site, independent of any session
    pub async fn open_vendor_site(opener: &dyn UrlOpener, config: &OnboardingConfig) -> Result<()> {
        info!("Opening vendor site {}", config.urls.vendor_site);
        opener.open(&config.urls.vendor_site).await
    }
}
