//! Release lookup errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReleaseError>;

#[derive(Error, Debug)]
pub enum ReleaseError {
    /// Selector is neither LATEST nor MAJOR.MINOR.PATCH
    #[error("Invalid version selector: {version}")]
    InvalidVersion { version: String },

    /// Browser tag has no release archive
    #[error("Unsupported browser: {browser}. Valid browsers: chrome, firefox")]
    InvalidBrowser { browser: String },

    /// The feed could not be fetched or answered with a non-success status
    #[error("Release feed unavailable: {reason}")]
    FeedUnavailable { reason: String },

    /// The feed answered but the body is not a release list
    #[error("Malformed release feed: {0}")]
    MalformedFeed(String),

    #[error("No release matches version {version}")]
    VersionNotFound { version: String },

    #[error("Release {tag} has no {marker} asset")]
    AssetNotFound { tag: String, marker: String },
}

impl ReleaseError {
    pub fn invalid_version(version: impl Into<String>) -> Self {
        Self::InvalidVersion {
            version: version.into(),
        }
    }

    pub fn invalid_browser(browser: impl Into<String>) -> Self {
        Self::InvalidBrowser {
            browser: browser.into(),
        }
    }

    pub fn feed_unavailable(reason: impl Into<String>) -> Self {
        Self::FeedUnavailable {
            reason: reason.into(),
        }
    }
}
