//! Store reachability probe

use async_trait::async_trait;
use portal_onboarding_core::adapters::StoreProbe;
use portal_onboarding_core::OnboardingConfig;
use std::time::Duration;
use tracing::debug;

/// Races a request to the store against a timer
///
/// Store endpoints usually refuse cross-origin introspection, so whether the
/// request succeeds says nothing. Any answer, including a transport error,
/// counts as reachable; only the timer winning counts as unreachable. The
/// losing request is left to finish on its own.
pub struct HttpStoreProbe {
    client: reqwest::Client,
    store_url: String,
}

impl HttpStoreProbe {
    pub fn new(config: &OnboardingConfig) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.network.user_agent)
            .timeout(config.network.http_timeout())
            .build()?;

        Ok(Self {
            client,
            store_url: config.urls.chrome_store.clone(),
        })
    }

    /// Probe a different endpoint
    pub fn with_store_url(mut self, store_url: impl Into<String>) -> Self {
        self.store_url = store_url.into();
        self
    }
}

#[async_trait]
impl StoreProbe for HttpStoreProbe {
    async fn can_reach_store(&self, timeout: Duration) -> bool {
        let client = self.client.clone();
        let url = self.store_url.clone();

        let request = tokio::spawn(async move {
            match client.get(&url).send().await {
                Ok(response) => debug!("Store probe answered {}", response.status()),
                Err(e) => debug!("Store probe failed at transport level, treating as reachable: {}", e),
            }
        });

        tokio::select! {
            _ = request => true,
            _ = tokio::time::sleep(timeout) => {
                debug!("Store probe timed out after {:?}", timeout);
                false
            }
        }
    }
}
