//! Browser and extension state types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Browser family derived from the user agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserFamily {
    Firefox,
    Chrome,
    Chromium,
    Other,
}

impl BrowserFamily {
    /// Map a parsed browser name onto a family
    pub fn from_browser_name(name: &str) -> Self {
        match name {
            "Firefox" => Self::Firefox,
            "Chrome" => Self::Chrome,
            "Chromium" => Self::Chromium,
            _ => Self::Other,
        }
    }

    /// Whether this browser installs extensions from the Chrome Web Store
    pub fn is_chrome_family(&self) -> bool {
        matches!(self, Self::Chrome | Self::Chromium)
    }

    /// Substring that identifies this family's package in a release asset URL
    pub fn asset_marker(&self) -> &'static str {
        match self {
            Self::Firefox => "firefox",
            // "chrom" matches both chrome and chromium package names
            _ => "chrom",
        }
    }

    /// Browser tag used in conventional archive names
    pub fn archive_tag(&self) -> &'static str {
        match self {
            Self::Firefox => "firefox",
            _ => "chrome",
        }
    }
}

impl fmt::Display for BrowserFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Firefox => "firefox",
            Self::Chrome => "chrome",
            Self::Chromium => "chromium",
            Self::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// Onboarding state, fixed when a session is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OnboardingState {
    /// The extension marker is present; nothing to offer
    Installed,

    /// The extension is missing; onboarding can be started
    NotInstalled,
}
