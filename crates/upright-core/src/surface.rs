//! Status surface seam.
//!
//! The core never talks to a tray icon directly; it pushes label updates
//! through this trait and a shell (tray, CLI, test) decides how to render
//! them.

/// Where the countdown and interval labels end up.
pub trait StatusSink: Send + Sync {
    fn set_tooltip(&self, text: &str);
    fn set_countdown(&self, label: &str);
    fn set_interval(&self, label: &str);
}

/// Discards all updates.
#[derive(Debug, Default)]
pub struct NullSink;

impl StatusSink for NullSink {
    fn set_tooltip(&self, _text: &str) {}
    fn set_countdown(&self, _label: &str) {}
    fn set_interval(&self, _label: &str) {}
}
