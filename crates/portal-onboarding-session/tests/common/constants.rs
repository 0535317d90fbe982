//! Shared constants for session tests

pub const UA_FIREFOX: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";
pub const UA_CHROME: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";
pub const UA_CHROMIUM: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chromium/120.0.6099.224 Chrome/120.0.6099.224 Safari/537.36";
pub const UA_SAFARI: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_5) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Safari/605.1.15";

pub const DAPP_HOST: &str = "dapp.example.org";
pub const VENDOR_HOST: &str = "portal.conflux-chain.org";
pub const VENDOR_HOST_ALT: &str = "portal.confluxnetwork.org";

pub const FEED_PATH: &str = "/repos/Conflux-Chain/conflux-portal/releases";

pub const CHROM_ASSET_1_2_3: &str =
    "https://github.com/Conflux-Chain/conflux-portal/releases/download/v1.2.3/conflux-portal-chrom-1.2.3.zip";
pub const FIREFOX_ASSET_1_2_3: &str =
    "https://github.com/Conflux-Chain/conflux-portal/releases/download/v1.2.3/conflux-portal-firefox-1.2.3.zip";
pub const CHROME_ARCHIVE_0_1_4: &str =
    "https://github.com/Conflux-Chain/conflux-portal/releases/download/v0.1.4/conflux-portal-chrome-0.1.4.zip";

pub const IN_PROGRESS_KEY: &str = "ONBOARDING_IN_PROGRESS";
pub const DOWNLOAD_URL_KEY: &str = "PORTAL_DOWNLOAD_URL";
