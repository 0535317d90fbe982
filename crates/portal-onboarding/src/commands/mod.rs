//! CLI command implementations

pub mod config;
pub mod open_vendor;
pub mod release;
pub mod resolve;
pub mod start;

use anyhow::{Context, Result};
use portal_onboarding_core::adapters::{
    JsonFileSessionCache, MemorySessionCache, PrintUrlOpener, SessionCache, StaticEnvironment,
    SystemUrlOpener, UrlOpener,
};
use portal_onboarding_core::{HierarchicalConfigLoader, OnboardingConfig};
use portal_onboarding_session::{Collaborators, OnboardingOptions, OnboardingSession, ResolveOptions};
use std::sync::Arc;
use tracing::debug;

use crate::cli::SessionArgs;

/// Load the effective configuration
pub(crate) fn load_config() -> Result<OnboardingConfig> {
    let loader = HierarchicalConfigLoader::new().context("Failed to locate config directory")?;
    debug!("Loading configuration from {}", loader.config_dir());
    loader.load().context("Failed to load configuration")
}

/// Host part of `page_url`, or the raw value when it is not a URL
pub(crate) fn page_host(page_url: &str) -> String {
    match url::Url::parse(page_url) {
        Ok(url) => url.host_str().unwrap_or_default().to_string(),
        Err(_) => page_url.trim().to_string(),
    }
}

pub(crate) fn opener(print_only: bool) -> Arc<dyn UrlOpener> {
    if print_only {
        Arc::new(PrintUrlOpener)
    } else {
        Arc::new(SystemUrlOpener)
    }
}

fn session_cache(args: &SessionArgs) -> Result<Arc<dyn SessionCache>> {
    match &args.session_file {
        Some(path) => {
            let cache = JsonFileSessionCache::open(path.as_std_path())
                .with_context(|| format!("Failed to open session file {}", path))?;
            Ok(Arc::new(cache))
        }
        None => Ok(Arc::new(MemorySessionCache::new())),
    }
}

fn environment(args: &SessionArgs) -> StaticEnvironment {
    let host = args.page_url.as_deref().map(page_host).unwrap_or_default();
    let environment = StaticEnvironment::new(args.user_agent.clone(), host);
    if args.installed {
        environment.with_extension()
    } else {
        environment
    }
}

pub(crate) fn resolve_options(args: &SessionArgs) -> ResolveOptions {
    ResolveOptions {
        ignore_session_cache: args.ignore_session_cache,
        cached_recommended_version: args.recommended_version.clone(),
        vendor_site_override: args.vendor_site,
    }
}

fn onboarding_options(args: &SessionArgs) -> OnboardingOptions {
    OnboardingOptions {
        ignore_session_cache: args.ignore_session_cache,
        cached_recommended_version: args.recommended_version.clone(),
        // Nothing in a terminal would call the shim
        inject_shim: false,
        vendor_site_override: args.vendor_site,
    }
}

/// Wire the stock adapters for the page described by `args`
pub(crate) fn build_collaborators(
    args: &SessionArgs,
    opener: Arc<dyn UrlOpener>,
) -> Result<(Collaborators, Arc<OnboardingConfig>)> {
    let config = Arc::new(load_config()?);
    let collaborators = Collaborators::new(
        Arc::new(environment(args)),
        session_cache(args)?,
        opener,
        &config,
    )?;
    Ok((collaborators, config))
}

/// Build a session for the page described by `args`
///
/// The session starts resolving the download URL as soon as it exists.
pub(crate) fn build_session(
    args: &SessionArgs,
    opener: Arc<dyn UrlOpener>,
) -> Result<(OnboardingSession, Arc<OnboardingConfig>)> {
    let (collaborators, config) = build_collaborators(args, opener)?;
    let session = OnboardingSession::new(collaborators, config.clone(), onboarding_options(args));
    Ok((session, config))
}
