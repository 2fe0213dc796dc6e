//! JSON-backed reminder settings.
//!
//! The settings record is tiny and rewritten in full on every mutation.
//! `load` never fails: a missing or unreadable file yields the defaults
//! (which are persisted immediately), and out-of-range values are clamped
//! and re-saved.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConfigError, Result};

pub const DEFAULT_INTERVAL_MINUTES: u32 = 3;
pub const MIN_INTERVAL_MINUTES: u32 = 1;
pub const MAX_INTERVAL_MINUTES: u32 = 24 * 60;

pub const DEFAULT_TITLE: &str = "Posture Reminder";
pub const DEFAULT_MESSAGE: &str = "Time to check your posture!";

/// The persisted configuration record.
///
/// Shared between the command handlers (writers) and the reminder clock
/// (reader) as a [`SharedConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderConfig {
    #[serde(default = "default_interval")]
    pub interval_minutes: u32,
    #[serde(default = "default_title")]
    pub reminder_title: String,
    #[serde(default = "default_message")]
    pub reminder_message: String,
}

/// Config handle shared across the timer loop and command handlers.
pub type SharedConfig = Arc<RwLock<ReminderConfig>>;

fn default_interval() -> u32 {
    DEFAULT_INTERVAL_MINUTES
}
fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}
fn default_message() -> String {
    DEFAULT_MESSAGE.to_string()
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            interval_minutes: DEFAULT_INTERVAL_MINUTES,
            reminder_title: DEFAULT_TITLE.to_string(),
            reminder_message: DEFAULT_MESSAGE.to_string(),
        }
    }
}

/// Clamp an interval candidate into the valid range.
pub fn clamp_interval(minutes: i64) -> u32 {
    minutes.clamp(MIN_INTERVAL_MINUTES as i64, MAX_INTERVAL_MINUTES as i64) as u32
}

impl ReminderConfig {
    /// Clamp out-of-range values and substitute defaults for empty strings.
    /// Returns true when anything changed.
    pub fn sanitize(&mut self) -> bool {
        let mut changed = false;

        let clamped = clamp_interval(self.interval_minutes as i64);
        if clamped != self.interval_minutes {
            self.interval_minutes = clamped;
            changed = true;
        }
        if self.reminder_title.is_empty() {
            self.reminder_title = DEFAULT_TITLE.to_string();
            changed = true;
        }
        if self.reminder_message.is_empty() {
            self.reminder_message = DEFAULT_MESSAGE.to_string();
            changed = true;
        }
        changed
    }

    pub fn into_shared(self) -> SharedConfig {
        Arc::new(RwLock::new(self))
    }
}

/// Filesystem location for the settings record and supporting assets.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    dir: PathBuf,
}

impl SettingsStore {
    /// Open the store at the default settings directory.
    pub fn open() -> Result<Self> {
        Ok(Self {
            dir: super::data_dir()?,
        })
    }

    /// Open the store at an explicit directory (used by tests and embedders).
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn settings_path(&self) -> PathBuf {
        self.dir.join("settings.json")
    }

    pub fn icon_path(&self) -> PathBuf {
        self.dir.join("upright.ico")
    }

    pub fn license_path(&self) -> PathBuf {
        self.dir.join("LICENSE.txt")
    }

    /// Load the settings record, falling back to defaults.
    ///
    /// Missing file, unparsable JSON and out-of-range values all recover
    /// locally; every recovery re-persists the corrected record.
    pub fn load(&self) -> ReminderConfig {
        let path = self.settings_path();
        let data = match std::fs::read_to_string(&path) {
            Ok(data) => data,
            Err(_) => {
                let cfg = ReminderConfig::default();
                if let Err(e) = self.save(&cfg) {
                    warn!("could not write default settings: {e}");
                }
                return cfg;
            }
        };

        let mut cfg: ReminderConfig = match serde_json::from_str(&data) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("invalid settings JSON ({e}), resetting to defaults");
                let cfg = ReminderConfig::default();
                if let Err(e) = self.save(&cfg) {
                    warn!("could not write default settings: {e}");
                }
                return cfg;
            }
        };

        if cfg.sanitize() {
            if let Err(e) = self.save(&cfg) {
                warn!("could not save sanitized settings: {e}");
            }
        }
        cfg
    }

    /// Persist the settings record as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if serialization or the file write fails.
    pub fn save(&self, cfg: &ReminderConfig) -> Result<(), ConfigError> {
        let data = serde_json::to_string_pretty(cfg)?;
        let path = self.settings_path();
        std::fs::write(&path, data).map_err(|source| ConfigError::SaveFailed { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults_and_creates_file() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::with_dir(dir.path());

        let cfg = store.load();
        assert_eq!(cfg, ReminderConfig::default());
        assert_eq!(cfg.interval_minutes, 3);
        assert_eq!(cfg.reminder_title, "Posture Reminder");
        assert_eq!(cfg.reminder_message, "Time to check your posture!");
        assert!(store.settings_path().exists());
    }

    #[test]
    fn out_of_range_interval_is_clamped_and_resaved() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::with_dir(dir.path());
        std::fs::write(
            store.settings_path(),
            r#"{"interval_minutes": 99999, "reminder_title": "t", "reminder_message": "m"}"#,
        )
        .unwrap();

        let cfg = store.load();
        assert_eq!(cfg.interval_minutes, 1440);

        // The clamped value must have been written back.
        let on_disk: ReminderConfig =
            serde_json::from_str(&std::fs::read_to_string(store.settings_path()).unwrap()).unwrap();
        assert_eq!(on_disk.interval_minutes, 1440);
    }

    #[test]
    fn zero_interval_is_clamped_to_minimum() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::with_dir(dir.path());
        std::fs::write(
            store.settings_path(),
            r#"{"interval_minutes": 0, "reminder_title": "t", "reminder_message": "m"}"#,
        )
        .unwrap();

        assert_eq!(store.load().interval_minutes, 1);
    }

    #[test]
    fn empty_strings_are_replaced_with_defaults() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::with_dir(dir.path());
        std::fs::write(
            store.settings_path(),
            r#"{"interval_minutes": 10, "reminder_title": "", "reminder_message": ""}"#,
        )
        .unwrap();

        let cfg = store.load();
        assert_eq!(cfg.interval_minutes, 10);
        assert_eq!(cfg.reminder_title, DEFAULT_TITLE);
        assert_eq!(cfg.reminder_message, DEFAULT_MESSAGE);
    }

    #[test]
    fn corrupt_json_resets_to_defaults() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::with_dir(dir.path());
        std::fs::write(store.settings_path(), "{not json").unwrap();

        let cfg = store.load();
        assert_eq!(cfg, ReminderConfig::default());
    }

    #[test]
    fn missing_fields_default() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::with_dir(dir.path());
        std::fs::write(store.settings_path(), r#"{"interval_minutes": 7}"#).unwrap();

        let cfg = store.load();
        assert_eq!(cfg.interval_minutes, 7);
        assert_eq!(cfg.reminder_title, DEFAULT_TITLE);
    }

    #[test]
    fn save_roundtrips() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::with_dir(dir.path());
        let cfg = ReminderConfig {
            interval_minutes: 42,
            reminder_title: "Stretch".into(),
            reminder_message: "Stand up".into(),
        };
        store.save(&cfg).unwrap();
        assert_eq!(store.load(), cfg);
    }
}
