//! Modal dialog channel (fallback).
//!
//! Blocks until the user dismisses the dialog, so it must only run on a
//! detached blocking task. From the gateway's perspective it cannot fail:
//! once `show` returns, the reminder counts as delivered.

use rfd::{MessageButtons, MessageDialog, MessageLevel};

use super::{Notification, NotifyChannel};
use crate::error::DeliveryError;

#[derive(Debug, Default)]
pub struct DialogChannel;

impl DialogChannel {
    pub fn new() -> Self {
        Self
    }
}

impl NotifyChannel for DialogChannel {
    fn name(&self) -> &'static str {
        "dialog"
    }

    fn deliver(&self, note: &Notification) -> Result<(), DeliveryError> {
        let _ = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(&note.title)
            .set_description(&note.body)
            .set_buttons(MessageButtons::OkCustom(note.dismiss_label.clone()))
            .show();
        Ok(())
    }
}

/// Informational modal used by the About command.
pub fn show_info(title: &str, body: &str) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(title)
        .set_description(body)
        .set_buttons(MessageButtons::Ok)
        .show();
}
