//! Configuration loading and saving
//!
//! Settings live in `<config-dir>/tradedesk/config.toml`. A missing file
//! means defaults; an unparsable file is an error (silent fallback would
//! hide typos). Writes take an exclusive file lock so concurrent instances
//! cannot interleave partial content.

pub mod types;

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use tradedesk_core::prelude::*;
use tradedesk_core::Error as CoreError;

pub use types::{ApiSettings, DashboardSettings, Settings, UiSettings};

/// Directory holding TradeDesk configuration
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tradedesk")
}

/// Default settings file path
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load settings from `path`, or the default location when `None`
///
/// A missing file yields defaults; a malformed file is a hard error.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
    if !path.exists() {
        debug!("no settings file at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let text = fs::read_to_string(&path)?;
    let settings = toml::from_str(&text).map_err(|e| CoreError::ConfigInvalid {
        message: format!("{}: {e}", path.display()),
    })?;
    info!("loaded settings from {}", path.display());
    Ok(settings)
}

/// Save settings to `path`, or the default location when `None`
pub fn save_settings(settings: &Settings, path: Option<&Path>) -> Result<()> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let text = toml::to_string_pretty(settings).map_err(|e| CoreError::ConfigInvalid {
        message: e.to_string(),
    })?;

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;
    file.lock_exclusive()?;
    let outcome = file.write_all(text.as_bytes());
    let _ = fs2::FileExt::unlock(&file);
    outcome?;

    debug!("saved settings to {}", path.display());
    Ok(())
}
