//! Resolved download target types

use serde::{Deserialize, Serialize};
use std::fmt;

use super::UrlsConfig;

/// Where a resolved download URL came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DownloadSource {
    /// Chrome Web Store listing
    #[serde(rename = "chrome-store")]
    StoreChrome,

    /// Mozilla add-ons listing
    #[serde(rename = "firefox-store")]
    StoreFirefox,

    /// Vendor landing page
    VendorSite,

    /// A specific package from the release feed
    ReleaseAsset,

    /// The release listing page, used when the vendor site cannot pin an asset
    ReleasePage,
}

impl DownloadSource {
    /// Recover the source of a URL that was cached without one
    ///
    /// Any URL that is not one of the configured constants is a release asset.
    pub fn classify(url: &str, urls: &UrlsConfig) -> Self {
        if url == urls.chrome_store {
            Self::StoreChrome
        } else if url == urls.firefox_store {
            Self::StoreFirefox
        } else if url == urls.vendor_site {
            Self::VendorSite
        } else if url == urls.release_page {
            Self::ReleasePage
        } else {
            Self::ReleaseAsset
        }
    }
}

impl fmt::Display for DownloadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::StoreChrome => "chrome-store",
            Self::StoreFirefox => "firefox-store",
            Self::VendorSite => "vendor-site",
            Self::ReleaseAsset => "release-asset",
            Self::ReleasePage => "release-page",
        };
        write!(f, "{}", name)
    }
}

/// The URL handed to the user, with its provenance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDownloadTarget {
    pub url: String,
    pub source: DownloadSource,
}

impl ResolvedDownloadTarget {
    pub fn new(url: impl Into<String>, source: DownloadSource) -> Self {
        Self {
            url: url.into(),
            source,
        }
    }
}

impl fmt::Display for ResolvedDownloadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.url, self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_urls() {
        let urls = UrlsConfig::default();
        assert_eq!(
            DownloadSource::classify(&urls.chrome_store, &urls),
            DownloadSource::StoreChrome
        );
        assert_eq!(
            DownloadSource::classify(&urls.firefox_store, &urls),
            DownloadSource::StoreFirefox
        );
        assert_eq!(
            DownloadSource::classify(&urls.vendor_site, &urls),
            DownloadSource::VendorSite
        );
        assert_eq!(
            DownloadSource::classify(&urls.release_page, &urls),
            DownloadSource::ReleasePage
        );
    }

    #[test]
    fn test_classify_unknown_url_is_asset() {
        let urls = UrlsConfig::default();
        let url = "https://github.com/Conflux-Chain/conflux-portal/releases/download/v0.1.4/conflux-portal-chrome-0.1.4.zip";
        assert_eq!(DownloadSource::classify(url, &urls), DownloadSource::ReleaseAsset);
    }

    #[test]
    fn test_serialized_name_matches_display() {
        for source in [
            DownloadSource::StoreChrome,
            DownloadSource::StoreFirefox,
            DownloadSource::VendorSite,
            DownloadSource::ReleaseAsset,
            DownloadSource::ReleasePage,
        ] {
            let json = serde_json::to_value(source).unwrap();
            assert_eq!(json, serde_json::Value::String(source.to_string()));
        }

        let parsed: DownloadSource = serde_json::from_str("\"firefox-store\"").unwrap();
        assert_eq!(parsed, DownloadSource::StoreFirefox);
    }

    #[test]
    fn test_target_display() {
        let target = ResolvedDownloadTarget::new("https://portal.conflux-chain.org", DownloadSource::VendorSite);
        assert_eq!(target.to_string(), "https://portal.conflux-chain.org (vendor-site)");
    }
}
