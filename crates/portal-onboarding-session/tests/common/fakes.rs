//! Fake collaborators

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use portal_onboarding_core::adapters::{StoreProbe, UrlOpener};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Store probe with a fixed answer that counts its calls
#[derive(Debug, Default)]
pub struct FakeStoreProbe {
    reachable: bool,
    calls: AtomicU32,
}

impl FakeStoreProbe {
    pub fn reachable() -> Self {
        Self {
            reachable: true,
            calls: AtomicU32::new(0),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            calls: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StoreProbe for FakeStoreProbe {
    async fn can_reach_store(&self, _timeout: Duration) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reachable
    }
}

/// Opener that records every URL it is asked to open
#[derive(Debug, Default)]
pub struct RecordingUrlOpener {
    opened: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

impl RecordingUrlOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take `delay` before recording each open
    pub fn slow(delay: Duration) -> Self {
        Self {
            opened: Mutex::new(Vec::new()),
            delay: Some(delay),
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.opened.lock().unwrap().len()
    }

    /// Wait until at least `n` URLs were opened, up to one second
    pub async fn wait_for(&self, n: usize) -> bool {
        for _ in 0..100 {
            if self.count() >= n {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        false
    }
}

#[async_trait]
impl UrlOpener for RecordingUrlOpener {
    async fn open(&self, url: &str) -> Result<()> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// Opener that always fails
#[derive(Debug, Default)]
pub struct FailingUrlOpener {
    attempts: AtomicU32,
}

impl FailingUrlOpener {
    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UrlOpener for FailingUrlOpener {
    async fn open(&self, _url: &str) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(anyhow!("no browser available"))
    }
}
