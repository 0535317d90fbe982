//! Shared constants for release tests

pub const VERSION_0_1_4: &str = "0.1.4";
pub const VERSION_1_2_3: &str = "1.2.3";
pub const VERSION_9_9_9: &str = "9.9.9";

pub const TAG_V0_1_4: &str = "v0.1.4";
pub const TAG_V1_2_3: &str = "v1.2.3";

pub const FEED_PATH: &str = "/repos/Conflux-Chain/conflux-portal/releases";

pub const CHROM_ASSET_1_2_3: &str =
    "https://github.com/Conflux-Chain/conflux-portal/releases/download/v1.2.3/conflux-portal-chrom-1.2.3.zip";
pub const FIREFOX_ASSET_1_2_3: &str =
    "https://github.com/Conflux-Chain/conflux-portal/releases/download/v1.2.3/conflux-portal-firefox-1.2.3.zip";
pub const CHROME_ASSET_0_1_4: &str =
    "https://github.com/Conflux-Chain/conflux-portal/releases/download/v0.1.4/conflux-portal-chrome-0.1.4.zip";
pub const FIREFOX_ASSET_0_1_4: &str =
    "https://github.com/Conflux-Chain/conflux-portal/releases/download/v0.1.4/conflux-portal-firefox-0.1.4.zip";
