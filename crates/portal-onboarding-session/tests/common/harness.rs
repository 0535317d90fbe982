//! Collaborator wiring and feed mocks

use portal_onboarding_core::adapters::{MemorySessionCache, StaticEnvironment, UrlOpener};
use portal_onboarding_core::OnboardingConfig;
use portal_onboarding_release::ReleaseResolver;
use portal_onboarding_session::Collaborators;
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::constants::*;
use super::fakes::{FakeStoreProbe, RecordingUrlOpener};

/// Feed with one 1.2.3 release carrying chrome and firefox packages
pub fn feed_1_2_3() -> Value {
    json!([{
        "tag_name": "v1.2.3",
        "assets": [
            { "browser_download_url": CHROM_ASSET_1_2_3 },
            { "browser_download_url": FIREFOX_ASSET_1_2_3 }
        ]
    }])
}

/// Serve `feed`, requiring exactly `times` requests
pub async fn mock_feed(server: &MockServer, feed: Value, times: u64) {
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed))
        .expect(times)
        .mount(server)
        .await;
}

/// Fail the feed with `status`
pub async fn mock_feed_status(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Everything a test needs to observe
pub struct Harness {
    pub config: Arc<OnboardingConfig>,
    pub environment: Arc<StaticEnvironment>,
    pub cache: Arc<MemorySessionCache>,
    pub probe: Arc<FakeStoreProbe>,
    pub opener: Arc<RecordingUrlOpener>,
    pub collaborators: Collaborators,
}

impl Harness {
    /// Wire fakes around `environment`; the release feed points at `server`
    /// when given, otherwise at an address nothing listens on
    pub fn new(environment: StaticEnvironment, probe: FakeStoreProbe, server: Option<&MockServer>) -> Self {
        Self::with_opener(environment, probe, server, RecordingUrlOpener::new())
    }

    pub fn with_opener(
        environment: StaticEnvironment,
        probe: FakeStoreProbe,
        server: Option<&MockServer>,
        opener: RecordingUrlOpener,
    ) -> Self {
        let config = Arc::new(OnboardingConfig::default());
        let environment = Arc::new(environment);
        let cache = Arc::new(MemorySessionCache::new());
        let probe = Arc::new(probe);
        let opener = Arc::new(opener);

        let feed_url = match server {
            Some(server) => format!("{}{}", server.uri(), FEED_PATH),
            None => format!("http://127.0.0.1:9{}", FEED_PATH),
        };
        let releases = ReleaseResolver::new(&config).unwrap().with_feed_url(feed_url);

        let collaborators = Collaborators::new(
            environment.clone(),
            cache.clone(),
            opener.clone() as Arc<dyn UrlOpener>,
            &config,
        )
        .unwrap()
        .with_store_probe(probe.clone())
        .with_release_resolver(releases);

        Self {
            config,
            environment,
            cache,
            probe,
            opener,
            collaborators,
        }
    }
}
