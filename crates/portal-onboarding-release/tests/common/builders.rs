//! Builders for release feed payloads

use serde_json::{json, Value};

use super::constants::*;

/// Builder for one feed entry
#[derive(Debug, Clone)]
pub struct ReleaseJsonBuilder {
    tag_name: String,
    prerelease: bool,
    assets: Vec<String>,
}

impl ReleaseJsonBuilder {
    pub fn new(tag: &str) -> Self {
        Self {
            tag_name: tag.to_string(),
            prerelease: false,
            assets: Vec::new(),
        }
    }

    pub fn prerelease(mut self) -> Self {
        self.prerelease = true;
        self
    }

    pub fn asset(mut self, url: &str) -> Self {
        self.assets.push(url.to_string());
        self
    }

    pub fn build(self) -> Value {
        json!({
            "tag_name": self.tag_name,
            "name": format!("Conflux Portal {}", self.tag_name),
            "prerelease": self.prerelease,
            "draft": false,
            "published_at": "2020-03-01T00:00:00Z",
            "assets": self
                .assets
                .iter()
                .map(|url| json!({ "browser_download_url": url }))
                .collect::<Vec<_>>(),
        })
    }
}

/// Feed with 1.2.3 (newest) and 0.1.4
pub fn standard_feed() -> Value {
    json!([
        ReleaseJsonBuilder::new(TAG_V1_2_3)
            .asset(CHROM_ASSET_1_2_3)
            .asset(FIREFOX_ASSET_1_2_3)
            .build(),
        ReleaseJsonBuilder::new(TAG_V0_1_4)
            .asset(CHROME_ASSET_0_1_4)
            .asset(FIREFOX_ASSET_0_1_4)
            .build(),
    ])
}
