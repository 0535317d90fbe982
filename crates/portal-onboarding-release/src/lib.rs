//! Release lookup for portal onboarding
//!
//! Provides:
//! - Version selector validation (`LATEST` or `MAJOR.MINOR.PATCH`)
//! - Release feed lookup with per-browser asset matching
//! - Deterministic archive URLs for an already-known version

pub mod archive;
pub mod error;
pub mod releases;
pub mod version;

pub use archive::{build_release_zip_url, ArchiveUrlBuilder};
pub use error::{ReleaseError, Result};
pub use releases::{select_asset, select_release, Release, ReleaseAsset, ReleaseResolver};
pub use version::VersionSelector;

/// Project release archives are named after
pub const ARCHIVE_PREFIX: &str = "conflux-portal";
