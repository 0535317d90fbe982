//! Start command

use anyhow::{bail, Context, Result};
use tokio::task::JoinHandle;

use crate::cli::StartArgs;
use crate::output;

pub async fn run(args: StartArgs) -> Result<()> {
    let (session, _config) = super::build_session(&args.session, super::opener(args.print_only))?;

    if session.is_installed() {
        output::success("Conflux Portal is already installed");
        return Ok(());
    }

    match session.start_onboarding() {
        Some(open) => {
            let url = session.download_url().await.url;
            await_open(open).await?;
            if !args.print_only {
                output::success(&format!("Opened {}", url));
            }
        }
        None => output::warning("Onboarding already in progress for this session"),
    }

    Ok(())
}

/// Wait for the open action; an opener failure becomes an error
async fn await_open(open: JoinHandle<bool>) -> Result<()> {
    if !open.await.context("Onboarding task failed")? {
        bail!("Failed to open the download page");
    }
    Ok(())
}
