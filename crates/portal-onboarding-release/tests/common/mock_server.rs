//! Wiremock helpers for the release feed

use portal_onboarding_core::OnboardingConfig;
use portal_onboarding_release::ReleaseResolver;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::constants::FEED_PATH;

/// Serve `feed` as the release list
pub async fn mock_feed(server: &MockServer, feed: Value) {
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed))
        .mount(server)
        .await;
}

/// Serve `feed` and require exactly `times` requests
pub async fn mock_feed_expecting(server: &MockServer, feed: Value, times: u64) {
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed))
        .expect(times)
        .mount(server)
        .await;
}

/// Answer the feed with `status`
pub async fn mock_feed_status(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Answer the feed with a raw body
pub async fn mock_feed_body(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Resolver pointed at the mock server's feed
pub fn resolver_for(server: &MockServer) -> ReleaseResolver {
    ReleaseResolver::new(&OnboardingConfig::default())
        .unwrap()
        .with_feed_url(format!("{}{}", server.uri(), FEED_PATH))
}
