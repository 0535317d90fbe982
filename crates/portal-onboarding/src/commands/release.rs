//! Release commands

use anyhow::{Context, Result};
use portal_onboarding_core::BrowserFamily;
use portal_onboarding_release::{ArchiveUrlBuilder, Release, ReleaseResolver};

use crate::cli::{ReleaseArgs, ReleasesArgs};
use crate::output;

/// Print the asset URL for one browser and version
pub async fn run(args: ReleaseArgs) -> Result<()> {
    let config = super::load_config()?;
    let family = BrowserFamily::from(args.browser);

    let url = if args.offline {
        ArchiveUrlBuilder::from_config(&config.urls).build_for_family(family, &args.release_version)?
    } else {
        let releases = ReleaseResolver::new(&config)?;
        let spinner = output::spinner("Querying release feed...");
        let result = releases.resolve_release_asset_url(family, &args.release_version).await;
        spinner.finish_and_clear();
        result.with_context(|| format!("No {} release for {}", family, args.release_version))?
    };

    println!("{}", url);
    Ok(())
}

/// List releases in the feed
pub async fn list(args: ReleasesArgs) -> Result<()> {
    let config = super::load_config()?;
    let releases = ReleaseResolver::new(&config)?;

    let spinner = output::spinner("Fetching releases...");
    let result = releases.list_releases().await;
    spinner.finish_and_clear();
    let feed = result.context("Failed to fetch release feed")?;

    let shown = visible(&feed, args.all, args.limit);
    if shown.is_empty() {
        output::info("No releases found");
        return Ok(());
    }

    output::header(&format!("Releases ({})", releases.feed_url()));
    for release in shown {
        let mut line = release.tag_name.clone();
        if release.prerelease {
            line.push_str(" (prerelease)");
        }
        if release.draft {
            line.push_str(" (draft)");
        }
        output::kv(&line, &format!("{} assets", release.assets.len()));
    }
    Ok(())
}

fn visible(feed: &[Release], all: bool, limit: usize) -> Vec<&Release> {
    feed.iter()
        .filter(|r| all || (!r.prerelease && !r.draft))
        .take(limit)
        .collect()
}
