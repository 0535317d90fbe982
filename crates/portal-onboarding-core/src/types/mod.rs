//! Type definitions for portal onboarding

mod browser;
mod download;
mod onboarding_config;

pub use browser::*;
pub use download::*;
pub use onboarding_config::*;
