//! Environment probe: browser family and extension presence

use tracing::debug;

use crate::adapters::{ExecutionEnvironment, UserAgentParser};
use crate::types::{BrowserFamily, OnboardingState};

/// Classify a user agent into a browser family
///
/// Never fails; anything the parser does not name as Firefox, Chrome or
/// Chromium is `Other`.
pub fn detect_browser_family(parser: &dyn UserAgentParser, user_agent: &str) -> BrowserFamily {
    let info = parser.parse(user_agent);
    let family = info
        .name
        .as_deref()
        .map(BrowserFamily::from_browser_name)
        .unwrap_or(BrowserFamily::Other);
    debug!("Detected browser {:?} -> {}", info.name, family);
    family
}

/// Whether the extension marker is present in `environment`
pub fn is_extension_installed(environment: &dyn ExecutionEnvironment) -> bool {
    environment.has_extension_marker()
}

/// Onboarding state for `environment`
pub fn onboarding_state(environment: &dyn ExecutionEnvironment) -> OnboardingState {
    if is_extension_installed(environment) {
        OnboardingState::Installed
    } else {
        OnboardingState::NotInstalled
    }
}
