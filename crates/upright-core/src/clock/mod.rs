mod countdown;
mod engine;

pub use countdown::{format_ms, format_seconds};
pub use engine::{now_ms, ClockSnapshot, ClockState, Display, ReminderClock, Tick};
