//! Common test infrastructure for portal-onboarding-session tests
//!
//! - `constants`: user agents, hosts and asset URLs
//! - `fakes`: counting store probe and recording URL openers
//! - `harness`: wiremock feed helpers and collaborator wiring

#![allow(dead_code)]

pub mod constants;
pub mod fakes;
pub mod harness;

pub use constants::*;
pub use fakes::*;
pub use harness::*;
