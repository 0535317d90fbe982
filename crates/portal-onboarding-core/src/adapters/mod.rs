//! Collaborator traits for everything outside the resolution logic
//!
//! The page environment, session cache, URL opening, user-agent parsing and
//! store probing are injected so callers (and tests) decide how each one
//! touches the outside world.

mod environment;
mod opener;
mod session_cache;
mod user_agent;

pub use environment::StaticEnvironment;
pub use opener::{PrintUrlOpener, SystemUrlOpener};
pub use session_cache::{JsonFileSessionCache, MemorySessionCache};
pub use user_agent::WootheeParser;

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Callable installed in place of the extension's entry point
pub type ShimEntryPoint = Arc<dyn Fn() + Send + Sync>;

/// The page the onboarding helper is embedded in
pub trait ExecutionEnvironment: Send + Sync {
    /// Whether the extension has announced itself in this environment
    fn has_extension_marker(&self) -> bool;

    /// User agent string of the current browser
    fn user_agent(&self) -> String;

    /// Host of the current page
    fn host(&self) -> String;

    /// Replace the extension slot with a stand-in exposing `entry_point`
    fn install_shim(&self, entry_point: ShimEntryPoint);
}

/// Session-scoped string key-value store
///
/// Writers overwrite unconditionally; there is no expiry.
pub trait SessionCache: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);
}

/// Opens a URL in a new top-level browsing context
#[async_trait]
pub trait UrlOpener: Send + Sync {
    async fn open(&self, url: &str) -> Result<()>;
}

/// Browser identification extracted from a user agent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserInfo {
    /// Browser name as reported by the parser, e.g. "Chrome"
    pub name: Option<String>,
}

/// User-agent parser
pub trait UserAgentParser: Send + Sync {
    fn parse(&self, user_agent: &str) -> BrowserInfo;
}

/// Time-bounded reachability check for the extension store
#[async_trait]
pub trait StoreProbe: Send + Sync {
    /// `false` only when `timeout` elapses before the store answers
    async fn can_reach_store(&self, timeout: Duration) -> bool;
}
