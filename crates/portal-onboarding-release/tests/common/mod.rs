//! Common test infrastructure for portal-onboarding-release tests
//!
//! - `constants`: versions, tags and asset URLs
//! - `builders`: fluent builders for release feed JSON
//! - `mock_server`: wiremock helpers serving the feed

#![allow(dead_code)]

pub mod builders;
pub mod constants;
pub mod mock_server;

pub use builders::*;
pub use constants::*;
pub use mock_server::*;
