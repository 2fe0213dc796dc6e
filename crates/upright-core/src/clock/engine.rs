//! Reminder clock.
//!
//! The clock is a wall-clock-based decision engine with no internal thread:
//! the caller invokes [`ReminderClock::tick_at`] once per tick period and
//! acts on the result. Each tick recomputes the countdown from the shared
//! config, so interval changes take effect on the next tick with no
//! restart.
//!
//! Trigger condition: `now - last_triggered >= interval` while no reminder
//! is currently showing. The `showing` flag is claimed with a
//! compare-and-swap before the tick returns a fire job, so a delivery
//! dispatched from the result can never overlap another one.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::countdown::format_ms;
use crate::notify::Notification;
use crate::storage::SharedConfig;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// In-memory clock state, shared between the tick loop and detached
/// delivery tasks. Never persisted; elapsed time resets on restart.
#[derive(Debug)]
pub struct ClockState {
    last_triggered_ms: AtomicI64,
    showing: AtomicBool,
}

impl ClockState {
    /// State for a process that started at `now_ms`.
    pub fn starting_at(now_ms: i64) -> Arc<Self> {
        Arc::new(Self {
            last_triggered_ms: AtomicI64::new(now_ms),
            showing: AtomicBool::new(false),
        })
    }

    pub fn last_triggered_ms(&self) -> i64 {
        self.last_triggered_ms.load(Ordering::SeqCst)
    }

    pub fn is_showing(&self) -> bool {
        self.showing.load(Ordering::SeqCst)
    }

    /// Claim the right to fire. Succeeds for exactly one caller until
    /// [`finish_delivery`](Self::finish_delivery) releases the flag.
    fn claim_fire(&self) -> bool {
        self.showing
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Record the end of a delivery attempt (success or fallback alike):
    /// reset the elapsed-time baseline, then release the showing flag.
    ///
    /// The baseline is stored first so a tick observing `showing == false`
    /// always sees the fresh baseline too.
    pub fn finish_delivery(&self, now_ms: i64) {
        self.last_triggered_ms.store(now_ms, Ordering::SeqCst);
        self.showing.store(false, Ordering::SeqCst);
    }
}

/// What the status surface should show for this tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Display {
    /// No countdown: a reminder is showing, or the trigger is due.
    Base,
    /// Formatted time remaining until the next trigger.
    Countdown(String),
}

/// Result of one tick evaluation.
#[derive(Debug)]
pub struct Tick {
    pub display: Display,
    /// Present when this tick claimed a trigger; the caller dispatches
    /// delivery and must eventually call `finish_delivery`.
    pub fire: Option<Notification>,
}

/// Serializable view of the clock, for logs and status output.
#[derive(Debug, Clone, Serialize)]
pub struct ClockSnapshot {
    pub interval_minutes: u32,
    pub last_triggered: DateTime<Utc>,
    pub next_trigger: DateTime<Utc>,
    pub remaining_ms: i64,
    pub showing: bool,
}

/// The recurring reminder scheduler.
pub struct ReminderClock {
    config: SharedConfig,
    state: Arc<ClockState>,
    icon: Option<PathBuf>,
}

impl ReminderClock {
    pub fn new(config: SharedConfig, state: Arc<ClockState>, icon: Option<PathBuf>) -> Self {
        Self {
            config,
            state,
            icon,
        }
    }

    pub fn state(&self) -> &Arc<ClockState> {
        &self.state
    }

    /// Evaluate one tick at the given wall-clock instant.
    ///
    /// While a reminder is showing the countdown is suspended and the
    /// trigger check is skipped entirely.
    pub fn tick_at(&self, now_ms: i64) -> Tick {
        if self.state.is_showing() {
            return Tick {
                display: Display::Base,
                fire: None,
            };
        }

        let interval_ms = self.interval_ms();
        let last = self.state.last_triggered_ms();

        let remaining = last + interval_ms - now_ms;
        let display = if remaining <= 0 {
            Display::Base
        } else {
            Display::Countdown(format_ms(remaining))
        };

        let fire = if now_ms - last >= interval_ms && self.state.claim_fire() {
            let cfg = self.config.read();
            let mut note = Notification::new(&cfg.reminder_title, &cfg.reminder_message);
            if let Some(icon) = &self.icon {
                note = note.with_icon(icon.clone());
            }
            Some(note)
        } else {
            None
        };

        Tick { display, fire }
    }

    pub fn snapshot_at(&self, now_ms: i64) -> ClockSnapshot {
        let interval_minutes = self.config.read().interval_minutes;
        let last = self.state.last_triggered_ms();
        let next = last + interval_minutes as i64 * 60_000;
        ClockSnapshot {
            interval_minutes,
            last_triggered: DateTime::from_timestamp_millis(last).unwrap_or_default(),
            next_trigger: DateTime::from_timestamp_millis(next).unwrap_or_default(),
            remaining_ms: (next - now_ms).max(0),
            showing: self.state.is_showing(),
        }
    }

    fn interval_ms(&self) -> i64 {
        self.config.read().interval_minutes as i64 * 60_000
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ReminderConfig;

    fn clock_with_interval(minutes: u32, start_ms: i64) -> ReminderClock {
        let config = ReminderConfig {
            interval_minutes: minutes,
            ..ReminderConfig::default()
        }
        .into_shared();
        ReminderClock::new(config, ClockState::starting_at(start_ms), None)
    }

    #[test]
    fn counts_down_before_the_trigger() {
        let clock = clock_with_interval(5, 0);
        let tick = clock.tick_at(1_000);
        assert_eq!(tick.display, Display::Countdown("0h 4m 59s".into()));
        assert!(tick.fire.is_none());
    }

    #[test]
    fn exactly_due_fires_once_and_sets_showing() {
        let clock = clock_with_interval(5, 0);

        let tick = clock.tick_at(5 * 60_000);
        assert!(tick.fire.is_some());
        assert!(clock.state().is_showing());
        assert_eq!(tick.display, Display::Base);

        // Subsequent ticks must not fire again while showing.
        for elapsed in [1, 60_000, 3_600_000] {
            let tick = clock.tick_at(5 * 60_000 + elapsed);
            assert!(tick.fire.is_none());
            assert_eq!(tick.display, Display::Base);
        }
    }

    #[test]
    fn one_second_short_does_not_fire() {
        let clock = clock_with_interval(5, 0);

        let tick = clock.tick_at(5 * 60_000 - 1_000);
        assert!(tick.fire.is_none());
        assert_eq!(tick.display, Display::Countdown("0h 0m 1s".into()));

        let tick = clock.tick_at(5 * 60_000);
        assert!(tick.fire.is_some());
    }

    #[test]
    fn delivery_completion_rearms_the_baseline() {
        let clock = clock_with_interval(5, 0);
        let due = 5 * 60_000;

        assert!(clock.tick_at(due).fire.is_some());
        clock.state().finish_delivery(due + 2_000);

        assert!(!clock.state().is_showing());
        assert_eq!(clock.state().last_triggered_ms(), due + 2_000);

        // Next cycle measures from the new baseline.
        let tick = clock.tick_at(due + 3_000);
        assert!(tick.fire.is_none());
        assert_eq!(tick.display, Display::Countdown("0h 4m 59s".into()));
        assert!(clock.tick_at(due + 2_000 + 5 * 60_000).fire.is_some());
    }

    #[test]
    fn interval_change_applies_on_the_next_tick() {
        let clock = clock_with_interval(30, 0);
        assert!(clock.tick_at(10 * 60_000).fire.is_none());

        clock.config.write().interval_minutes = 5;

        // Already past the shortened interval, so the next tick fires.
        let tick = clock.tick_at(10 * 60_000 + 1_000);
        assert!(tick.fire.is_some());
    }

    #[test]
    fn fire_carries_the_current_title_and_message() {
        let config = ReminderConfig {
            interval_minutes: 1,
            reminder_title: "Stretch".into(),
            reminder_message: "Shoulders back".into(),
        }
        .into_shared();
        let clock = ReminderClock::new(config, ClockState::starting_at(0), None);

        let note = clock.tick_at(60_000).fire.expect("due tick must fire");
        assert_eq!(note.title, "Stretch");
        assert_eq!(note.body, "Shoulders back");
    }

    #[test]
    fn snapshot_is_consistent_with_the_countdown() {
        let clock = clock_with_interval(5, 0);
        let snap = clock.snapshot_at(60_000);
        assert_eq!(snap.interval_minutes, 5);
        assert_eq!(snap.remaining_ms, 4 * 60_000);
        assert!(!snap.showing);
        assert_eq!(
            (snap.next_trigger - snap.last_triggered).num_minutes(),
            5
        );
    }
}
