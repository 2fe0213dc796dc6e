//! Desktop toast channel (primary).

use notify_rust::Timeout;

use super::{Notification, NotifyChannel};
use crate::error::DeliveryError;

const APP_NAME: &str = "Upright";
const TOAST_TIMEOUT_MS: u32 = 25_000;

/// Rich, non-blocking notification via the platform toast facility.
#[derive(Debug, Default)]
pub struct ToastChannel;

impl ToastChannel {
    pub fn new() -> Self {
        Self
    }
}

impl NotifyChannel for ToastChannel {
    fn name(&self) -> &'static str {
        "toast"
    }

    fn deliver(&self, note: &Notification) -> Result<(), DeliveryError> {
        let mut toast = notify_rust::Notification::new();
        toast
            .appname(APP_NAME)
            .summary(&note.title)
            .body(&note.body)
            .action("dismiss", &note.dismiss_label)
            .timeout(Timeout::Milliseconds(TOAST_TIMEOUT_MS));
        if let Some(icon) = note.icon.as_deref().and_then(|p| p.to_str()) {
            toast.icon(icon);
        }

        toast
            .show()
            .map(|_| ())
            .map_err(|e| DeliveryError::ChannelFailed {
                channel: "toast",
                message: e.to_string(),
            })
    }
}
