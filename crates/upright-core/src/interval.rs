//! Interval controller.
//!
//! Applies bounded adjustments to the configured interval, persists every
//! mutation (even a no-op clamp still rewrites the file, matching the
//! unconditional-save behavior of the settings store) and refreshes the
//! interval label synchronously with the change.

use std::sync::Arc;

use tracing::warn;

use crate::clock::format_seconds;
use crate::storage::{clamp_interval, SettingsStore, SharedConfig, DEFAULT_INTERVAL_MINUTES};
use crate::surface::StatusSink;

/// Label shown next to the countdown in the menu surface.
pub fn interval_label(minutes: u32) -> String {
    format!("Interval: {}", format_seconds(minutes as i64 * 60))
}

pub struct IntervalController {
    config: SharedConfig,
    store: SettingsStore,
    sink: Arc<dyn StatusSink>,
}

impl IntervalController {
    pub fn new(config: SharedConfig, store: SettingsStore, sink: Arc<dyn StatusSink>) -> Self {
        Self {
            config,
            store,
            sink,
        }
    }

    pub fn current(&self) -> u32 {
        self.config.read().interval_minutes
    }

    /// Add `delta_minutes` to the interval, clamped to the valid range.
    /// Returns the new interval.
    pub fn adjust(&self, delta_minutes: i64) -> u32 {
        let current = self.current() as i64;
        self.set(clamp_interval(current + delta_minutes))
    }

    /// Restore the fixed default interval.
    pub fn reset(&self) -> u32 {
        self.set(DEFAULT_INTERVAL_MINUTES)
    }

    /// Set the interval to an absolute value (clamped) and persist.
    pub fn set(&self, minutes: u32) -> u32 {
        let minutes = clamp_interval(minutes as i64);
        {
            let mut cfg = self.config.write();
            cfg.interval_minutes = minutes;
            if let Err(e) = self.store.save(&cfg) {
                warn!("could not save settings: {e}");
            }
        }
        self.sink.set_interval(&interval_label(minutes));
        minutes
    }
}
