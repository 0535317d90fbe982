//! URL openers

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::UrlOpener;

/// Opens URLs with the platform's default handler
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemUrlOpener;

impl SystemUrlOpener {
    fn command(url: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            // The empty string is the window title `start` expects first
            cmd.args(["/C", "start", "", url]);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

#[async_trait]
impl UrlOpener for SystemUrlOpener {
    async fn open(&self, url: &str) -> Result<()> {
        debug!("Opening {} with system handler", url);
        let status = Self::command(url)
            .status()
            .await
            .context("Failed to launch URL handler")?;

        if !status.success() {
            return Err(anyhow!("URL handler exited with {}", status));
        }
        Ok(())
    }
}

/// Prints URLs to stdout instead of opening them
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintUrlOpener;

#[async_trait]
impl UrlOpener for PrintUrlOpener {
    async fn open(&self, url: &str) -> Result<()> {
        println!("{}", url);
        Ok(())
    }
}
