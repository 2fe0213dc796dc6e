//! Error types for upright-core.
//!
//! Nothing in this crate surfaces an error dialog to the user: configuration
//! problems reset to defaults, delivery problems fall back to the secondary
//! channel, and resource-provisioning problems are logged and skipped.

use std::path::PathBuf;
use thiserror::Error;

/// Umbrella error type for upright-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Notification delivery errors
    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to write the settings file
    #[error("Failed to save settings to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the settings record
    #[error("Failed to serialize settings: {0}")]
    SerializeFailed(#[from] serde_json::Error),

    /// No writable location for the settings directory
    #[error("Failed to create settings directory {path}: {source}")]
    DirUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Notification-delivery errors.
///
/// Only the primary channel reports these; the fallback channel is treated
/// as always succeeding once it returns.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// A delivery channel rejected the notification
    #[error("Channel '{channel}' failed: {message}")]
    ChannelFailed {
        channel: &'static str,
        message: String,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
