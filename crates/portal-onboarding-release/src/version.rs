//! Version selector parsing

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::ReleaseError;

/// Sentinel selecting the newest release in the feed
pub const LATEST: &str = "LATEST";

static EXACT_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}\.\d{1,2}\.\d{1,2}$").expect("version regex is valid"));

/// Which release to pick from the feed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VersionSelector {
    /// First entry of the feed
    #[default]
    Latest,

    /// First entry whose tag contains this version
    Exact(String),
}

impl VersionSelector {
    /// Parse an exact version only; `LATEST` is rejected
    pub fn parse_exact(version: &str) -> Result<String, ReleaseError> {
        if EXACT_VERSION_RE.is_match(version) {
            Ok(version.to_string())
        } else {
            Err(ReleaseError::invalid_version(version))
        }
    }
}

impl FromStr for VersionSelector {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == LATEST {
            return Ok(Self::Latest);
        }
        Self::parse_exact(s).map(Self::Exact)
    }
}

impl fmt::Display for VersionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => write!(f, "{}", LATEST),
            Self::Exact(version) => write!(f, "{}", version),
        }
    }
}
