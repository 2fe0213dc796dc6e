//! # Upright Core Library
//!
//! Core logic for Upright, a posture-reminder utility: a recurring
//! 1-second scheduler that counts down to the next reminder, delivers it
//! through a primary/fallback notification gateway, and persists the
//! user-adjustable interval across restarts. Shells (tray icon, CLI)
//! attach through the [`StatusSink`] seam and the [`Command`] channel.
//!
//! ## Key components
//!
//! - [`ReminderClock`]: caller-driven tick engine deciding when to fire
//! - [`Gateway`]: primary-then-fallback notification delivery
//! - [`IntervalController`]: bounded, persisted interval mutations
//! - [`SettingsStore`]: JSON settings with self-healing load
//! - [`ReminderService`]: the loop wiring it all together

pub mod clock;
pub mod error;
pub mod interval;
pub mod notify;
pub mod service;
pub mod storage;
pub mod surface;

pub use clock::{format_ms, format_seconds, now_ms, ClockSnapshot, ClockState, Display, ReminderClock, Tick};
pub use error::{ConfigError, CoreError, DeliveryError, Result};
pub use interval::{interval_label, IntervalController};
pub use notify::{DialogChannel, Gateway, Notification, NotifyChannel, Outcome, ToastChannel};
pub use service::{Command, ReminderService};
pub use storage::{
    ensure_resources, ReminderConfig, SettingsStore, SharedConfig, DEFAULT_INTERVAL_MINUTES,
    MAX_INTERVAL_MINUTES, MIN_INTERVAL_MINUTES,
};
pub use surface::{NullSink, StatusSink};
