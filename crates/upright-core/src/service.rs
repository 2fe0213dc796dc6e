//! Reminder service loop.
//!
//! One `select!` loop multiplexes the 1-second ticker with the command
//! channel the menu surface feeds. Delivery runs on a detached blocking
//! task so a modal dialog never stalls the ticker; its completion is
//! observed only through the shared clock state, and a task still in
//! flight at shutdown is simply dropped.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::clock::{now_ms, ClockSnapshot, ClockState, Display, ReminderClock};
use crate::interval::{interval_label, IntervalController};
use crate::notify::{show_info, Gateway, Notification};
use crate::storage::SettingsStore;
use crate::surface::StatusSink;

const BASE_TOOLTIP: &str = "Sit tall. Move often. Feel better.";
const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Menu-surface commands. Each maps to one zero-argument trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Adjust the interval by a fixed number of minutes.
    Adjust(i64),
    ResetInterval,
    About,
    Quit,
}

/// Wires the clock, interval controller, gateway and status surface
/// together around a shared config.
pub struct ReminderService {
    clock: ReminderClock,
    interval: IntervalController,
    gateway: Arc<Gateway>,
    sink: Arc<dyn StatusSink>,
    store: SettingsStore,
}

impl ReminderService {
    pub fn new(store: SettingsStore, gateway: Gateway, sink: Arc<dyn StatusSink>) -> Self {
        let config = store.load().into_shared();
        let state = ClockState::starting_at(now_ms());
        let clock = ReminderClock::new(Arc::clone(&config), state, Some(store.icon_path()));
        let interval = IntervalController::new(config, store.clone(), Arc::clone(&sink));
        Self {
            clock,
            interval,
            gateway: Arc::new(gateway),
            sink,
            store,
        }
    }

    pub fn interval(&self) -> &IntervalController {
        &self.interval
    }

    pub fn snapshot(&self) -> ClockSnapshot {
        self.clock.snapshot_at(now_ms())
    }

    /// Drive the reminder loop until `Quit` arrives or the command
    /// channel closes.
    pub async fn run(&self, mut commands: mpsc::Receiver<Command>) {
        self.sink.set_tooltip(BASE_TOOLTIP);
        self.sink
            .set_interval(&interval_label(self.interval.current()));

        let mut ticker = tokio::time::interval(TICK_PERIOD);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let tick = self.clock.tick_at(now_ms());
                    self.render(&tick.display);
                    if let Some(note) = tick.fire {
                        info!(title = %note.title, "reminder due, dispatching delivery");
                        let _ = self.dispatch(note);
                    }
                }
                cmd = commands.recv() => match cmd {
                    Some(Command::Adjust(delta)) => {
                        let new = self.interval.adjust(delta);
                        info!(delta, new, "interval adjusted");
                    }
                    Some(Command::ResetInterval) => {
                        let new = self.interval.reset();
                        info!(new, "interval reset");
                    }
                    Some(Command::About) => {
                        let text = self.about_text();
                        let _ = tokio::task::spawn_blocking(move || show_info("About Upright", &text));
                    }
                    Some(Command::Quit) | None => {
                        debug!("reminder loop stopping");
                        break;
                    }
                },
            }
        }
    }

    /// Hand a claimed fire job to the gateway on a detached blocking task.
    /// Completion rearms the clock; nothing joins the task at shutdown.
    fn dispatch(&self, note: Notification) -> tokio::task::JoinHandle<()> {
        let gateway = Arc::clone(&self.gateway);
        let state = Arc::clone(self.clock.state());
        tokio::task::spawn_blocking(move || {
            let outcome = gateway.deliver(&note);
            debug!(?outcome, "delivery attempt finished");
            state.finish_delivery(now_ms());
        })
    }

    fn render(&self, display: &Display) {
        match display {
            Display::Base => {
                self.sink.set_tooltip(BASE_TOOLTIP);
                self.sink.set_countdown("Countdown:");
            }
            Display::Countdown(remaining) => {
                self.sink.set_tooltip(&format!("{BASE_TOOLTIP} ({remaining})"));
                self.sink.set_countdown(&format!("Countdown: {remaining}"));
            }
        }
    }

    fn about_text(&self) -> String {
        format!(
            "Upright - a posture reminder utility.\n\n\
             Periodically reminds you to check your posture, at an interval \
             you control from the tray menu.\n\n\
             Released under the MIT license. The full license text is in:\n{}",
            self.store.license_path().display()
        )
    }
}
