//! Shared utility functions for portal onboarding crates

use camino::Utf8PathBuf;
use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Directory name holding the user config, under the home directory
pub const CONFIG_DIR_NAME: &str = ".portal-onboarding";

/// Directory the user config file lives in (`$HOME/.portal-onboarding`)
///
/// `HOME` is read before `dirs::home_dir()`. The CLI runs from scripts and
/// CI jobs that point `HOME` at a throwaway directory to get a clean
/// `config.yaml`. `dirs` does not consult `HOME` on every platform, so
/// relying on it alone would read the real user's config there.
pub fn user_config_dir() -> Result<Utf8PathBuf> {
    let home = match env::var_os("HOME").filter(|home| !home.is_empty()) {
        Some(home) => PathBuf::from(home),
        None => dirs::home_dir()
            .ok_or_else(|| Error::invalid_config("Could not determine home directory"))?,
    };

    let home = Utf8PathBuf::from_path_buf(home)
        .map_err(|p| Error::invalid_config(format!("Non UTF-8 home directory: {}", p.display())))?;
    Ok(home.join(CONFIG_DIR_NAME))
}
