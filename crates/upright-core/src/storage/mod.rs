mod assets;
mod settings;

pub use assets::ensure_resources;
pub use settings::{
    clamp_interval, ReminderConfig, SettingsStore, SharedConfig, DEFAULT_INTERVAL_MINUTES,
    DEFAULT_MESSAGE, DEFAULT_TITLE, MAX_INTERVAL_MINUTES, MIN_INTERVAL_MINUTES,
};

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Returns the `upright/` settings directory, creating it if needed.
///
/// Resolution order: `UPRIGHT_CONFIG_DIR` (verbatim, no subdirectory) →
/// `APPDATA` → the per-user config directory → the current working
/// directory → the temp directory.
///
/// # Errors
/// Returns an error if the resolved directory cannot be created.
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("UPRIGHT_CONFIG_DIR") {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DirUnavailable {
            path: dir.clone(),
            source,
        })?;
        return Ok(dir);
    }

    let base = std::env::var_os("APPDATA")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(std::env::temp_dir);

    let dir = base.join("upright");
    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DirUnavailable {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
