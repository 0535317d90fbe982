//! Collaborator bundle shared by the resolver and the session

use anyhow::{Context, Result};
use portal_onboarding_core::adapters::{
    ExecutionEnvironment, SessionCache, StoreProbe, UrlOpener, UserAgentParser, WootheeParser,
};
use portal_onboarding_core::OnboardingConfig;
use portal_onboarding_release::ReleaseResolver;
use std::sync::Arc;

use crate::store_probe::HttpStoreProbe;

/// Everything the onboarding flow needs from the outside world
#[derive(Clone)]
pub struct Collaborators {
    pub environment: Arc<dyn ExecutionEnvironment>,
    pub session_cache: Arc<dyn SessionCache>,
    pub opener: Arc<dyn UrlOpener>,
    pub parser: Arc<dyn UserAgentParser>,
    pub store_probe: Arc<dyn StoreProbe>,
    pub releases: Arc<ReleaseResolver>,
}

impl Collaborators {
    /// Bundle the caller's environment, cache and opener with HTTP-backed
    /// probing and release lookup
    pub fn new(
        environment: Arc<dyn ExecutionEnvironment>,
        session_cache: Arc<dyn SessionCache>,
        opener: Arc<dyn UrlOpener>,
        config: &OnboardingConfig,
    ) -> Result<Self> {
        let store_probe =
            HttpStoreProbe::new(config).context("Failed to create store probe client")?;
        let releases =
            ReleaseResolver::new(config).context("Failed to create release feed client")?;

        Ok(Self {
            environment,
            session_cache,
            opener,
            parser: Arc::new(WootheeParser),
            store_probe: Arc::new(store_probe),
            releases: Arc::new(releases),
        })
    }

    pub fn with_parser(mut self, parser: Arc<dyn UserAgentParser>) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_store_probe(mut self, store_probe: Arc<dyn StoreProbe>) -> Self {
        self.store_probe = store_probe;
        self
    }

    pub fn with_release_resolver(mut self, releases: ReleaseResolver) -> Self {
        self.releases = Arc::new(releases);
        self
    }
}
