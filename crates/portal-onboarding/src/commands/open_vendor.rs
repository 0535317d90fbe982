//! Open vendor site command

use anyhow::Result;
use portal_onboarding_session::OnboardingSession;

use crate::cli::OpenVendorArgs;
use crate::output;

pub async fn run(args: OpenVendorArgs) -> Result<()> {
    let config = super::load_config()?;
    let opener = super::opener(args.print_only);

    OnboardingSession::open_vendor_site(opener.as_ref(), &config).await?;

    if !args.print_only {
        output::success(&format!("Opened {}", config.urls.vendor_site));
    }
    Ok(())
}
