//! Resolve command

use anyhow::Result;
use portal_onboarding_core::{onboarding_state, OnboardingConfig, OnboardingState, ResolvedDownloadTarget};
use portal_onboarding_session::{Collaborators, DownloadUrlResolver, ResolveOptions};
use serde::Serialize;
use std::sync::Arc;

use crate::cli::ResolveArgs;
use crate::output;

#[derive(Debug, Serialize)]
struct ResolveReport {
    state: OnboardingState,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<ResolvedDownloadTarget>,
}

pub async fn run(args: ResolveArgs) -> Result<()> {
    let (collaborators, config) = super::build_collaborators(&args.session, super::opener(true))?;
    let options = super::resolve_options(&args.session);

    let spinner = (!args.json).then(|| output::spinner("Resolving download URL..."));
    let report = build_report(collaborators, config, options, args.refresh).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match report.target {
        Some(target) => {
            output::header("Download");
            output::kv("Source", &target.source.to_string());
            output::kv("URL", &target.url);
        }
        None => output::success("Conflux Portal is already installed"),
    }

    Ok(())
}

/// Resolve once, or refresh past both caches when `refresh` is set
async fn build_report(
    collaborators: Collaborators,
    config: Arc<OnboardingConfig>,
    options: ResolveOptions,
    refresh: bool,
) -> ResolveReport {
    let state = onboarding_state(collaborators.environment.as_ref());
    if state == OnboardingState::Installed {
        return ResolveReport { state, target: None };
    }

    let resolver = DownloadUrlResolver::new(collaborators, config, options);
    let target = if refresh {
        resolver.refresh().await
    } else {
        resolver.resolve().await
    };

    ResolveReport {
        state,
        target: Some(target),
    }
}
