//! Onboarding session for the Conflux Portal extension
//!
//! Provides:
//! - A time-bounded store reachability probe
//! - The download URL resolver with its precedence policy and caching
//! - The onboarding session controller with its reentrancy guard and
//!   compatibility shim
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use portal_onboarding_core::adapters::{MemorySessionCache, StaticEnvironment, SystemUrlOpener};
//! use portal_onboarding_core::OnboardingConfig;
//! use portal_onboarding_session::{Collaborators, OnboardingOptions, OnboardingSession};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(OnboardingConfig::default());
//!     let collaborators = Collaborators::new(
//!         Arc::new(StaticEnvironment::new("Mozilla/5.0 ... Firefox/128.0", "dapp.example")),
//!         Arc::new(MemorySessionCache::new()),
//!         Arc::new(SystemUrlOpener),
//!         &config,
//!     )?;
//!
//!     let session = OnboardingSession::new(collaborators, config, OnboardingOptions::default());
//!     if let Some(open) = session.start_onboarding() {
//!         open.await?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod collaborators;
pub mod resolver;
pub mod session;
pub mod store_probe;

pub use collaborators::Collaborators;
pub use resolver::{DownloadUrlResolver, ResolveOptions};
pub use session::{OnboardingOptions, OnboardingSession};
pub use store_probe::HttpStoreProbe;
