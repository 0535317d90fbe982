//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand, ValueEnum};
use portal_onboarding_core::BrowserFamily;

/// Portal onboarding - find and open the Conflux Portal install page
#[derive(Parser, Debug)]
#[command(name = "portal-onboarding")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the download URL for a browser
    Resolve(ResolveArgs),

    /// Open the download page unless the extension is installed
    Start(StartArgs),

    /// Resolve a release asset URL
    Release(ReleaseArgs),

    /// List releases in the feed
    Releases(ReleasesArgs),

    /// Open the vendor site
    OpenVendor(OpenVendorArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Describes the page the onboarding flow runs in
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Browser user agent
    #[arg(long, env = "PORTAL_ONBOARDING_BROWSER_UA", default_value = "")]
    pub user_agent: String,

    /// URL (or bare host) of the page hosting the flow
    #[arg(long)]
    pub page_url: Option<String>,

    /// Treat the extension as already installed
    #[arg(long)]
    pub installed: bool,

    /// Neither read nor write the session cache
    #[arg(long)]
    pub ignore_session_cache: bool,

    /// Version recommended by an earlier visit
    #[arg(long)]
    pub recommended_version: Option<String>,

    /// Treat the page as the vendor site regardless of host
    #[arg(long)]
    pub vendor_site: bool,

    /// Persist the session cache in this JSON file
    #[arg(long)]
    pub session_file: Option<Utf8PathBuf>,
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Bypass every cache and resolve again
    #[arg(long)]
    pub refresh: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct StartArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Print the URL instead of opening it
    #[arg(long)]
    pub print_only: bool,
}

/// Browsers with a release package
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserArg {
    Chrome,
    Chromium,
    Firefox,
}

impl From<BrowserArg> for BrowserFamily {
    fn from(arg: BrowserArg) -> Self {
        match arg {
            BrowserArg::Chrome => BrowserFamily::Chrome,
            BrowserArg::Chromium => BrowserFamily::Chromium,
            BrowserArg::Firefox => BrowserFamily::Firefox,
        }
    }
}

#[derive(Args, Debug)]
pub struct ReleaseArgs {
    /// Browser to pick the package for
    #[arg(short, long, value_enum)]
    pub browser: BrowserArg,

    /// LATEST or MAJOR.MINOR.PATCH
    #[arg(long = "release-version", default_value = "LATEST")]
    pub release_version: String,

    /// Build the conventional archive URL without querying the feed
    #[arg(long)]
    pub offline: bool,
}

#[derive(Args, Debug)]
pub struct ReleasesArgs {
    /// Show at most this many releases
    #[arg(short, long, default_value_t = 20)]
    pub limit: usize,

    /// Include prereleases and drafts
    #[arg(long)]
    pub all: bool,
}

#[derive(Args, Debug)]
pub struct OpenVendorArgs {
    /// Print the URL instead of opening it
    #[arg(long)]
    pub print_only: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show(ConfigShowArgs),
}

#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
