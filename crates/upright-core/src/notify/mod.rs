//! Notification gateway.
//!
//! Delivery goes through a primary channel (a rich, non-blocking toast)
//! with a single fallback to a modal dialog when the primary reports any
//! error. The fallback is assumed to always succeed: a failed primary
//! attempt is logged and still counts as delivered, so the reminder
//! cadence does not change when the toast API is unavailable.

mod dialog;
mod toast;

pub use dialog::{show_info, DialogChannel};
pub use toast::ToastChannel;

use std::path::PathBuf;

use tracing::warn;

use crate::error::DeliveryError;

/// Payload handed to a delivery channel.
#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub body: String,
    /// Icon file for channels that can render one.
    pub icon: Option<PathBuf>,
    /// Label of the single dismiss action.
    pub dismiss_label: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            icon: None,
            dismiss_label: "OK".to_string(),
        }
    }

    pub fn with_icon(mut self, icon: PathBuf) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// A way of presenting a reminder to the user.
///
/// Implementations may block until the user dismisses the notification;
/// the reminder service always calls the gateway from a detached blocking
/// task.
pub trait NotifyChannel: Send + Sync {
    fn name(&self) -> &'static str;

    /// Present the notification, returning once the attempt completes.
    fn deliver(&self, note: &Notification) -> Result<(), DeliveryError>;
}

/// Which channel ended up presenting the reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Primary,
    Fallback,
}

/// Primary-then-fallback delivery.
pub struct Gateway {
    primary: Box<dyn NotifyChannel>,
    fallback: Box<dyn NotifyChannel>,
}

impl Gateway {
    pub fn new(primary: Box<dyn NotifyChannel>, fallback: Box<dyn NotifyChannel>) -> Self {
        Self { primary, fallback }
    }

    /// Toast primary with modal-dialog fallback.
    pub fn desktop() -> Self {
        Self::new(Box::new(ToastChannel::new()), Box::new(DialogChannel::new()))
    }

    /// Attempt the primary channel, falling back once on any error.
    ///
    /// No retries and no queueing: whatever happens, the attempt is over
    /// when this returns, and the caller treats the reminder as delivered.
    pub fn deliver(&self, note: &Notification) -> Outcome {
        match self.primary.deliver(note) {
            Ok(()) => Outcome::Primary,
            Err(e) => {
                warn!(channel = self.primary.name(), "primary delivery failed: {e}");
                if let Err(e) = self.fallback.deliver(note) {
                    warn!(channel = self.fallback.name(), "fallback delivery failed: {e}");
                }
                Outcome::Fallback
            }
        }
    }
}

/// Test double shared across the crate's unit tests.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    pub(crate) struct RecordingChannel {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl RecordingChannel {
        pub(crate) fn new(fail: bool) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    calls: Arc::clone(&calls),
                    fail,
                },
                calls,
            )
        }
    }

    impl NotifyChannel for RecordingChannel {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn deliver(&self, _note: &Notification) -> Result<(), DeliveryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(DeliveryError::ChannelFailed {
                    channel: "recording",
                    message: "forced failure".into(),
                })
            } else {
                Ok(())
            }
        }
    }
}
