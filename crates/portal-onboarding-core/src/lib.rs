//! # portal-onboarding-core
//!
//! Core library for portal onboarding providing:
//! - Configuration loading (embedded defaults, user file, environment)
//! - Domain types for browser families and resolved download targets
//! - Collaborator traits for the page environment, session cache, URL opening
//!   and user-agent parsing, plus stock implementations
//! - The environment probe that classifies the current browser

pub mod adapters;
pub mod config;
pub mod error;
pub mod probe;
pub mod types;
pub mod utils;

pub use config::HierarchicalConfigLoader;
pub use error::{Error, Result};
pub use probe::{detect_browser_family, is_extension_installed, onboarding_state};
pub use types::{
    BrowserFamily, DownloadSource, OnboardingConfig, OnboardingState, ResolvedDownloadTarget,
};
