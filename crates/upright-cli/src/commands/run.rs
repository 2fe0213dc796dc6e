//! Foreground reminder loop.
//!
//! This is the headless stand-in for the tray shell: the same command set
//! the tray menu would emit is read from stdin (`+1m`, `-1h`, `reset`,
//! `about`, `quit`), Ctrl-C maps to Quit, and label updates go to the log.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, trace, warn};
use upright_core::{ensure_resources, Command, Gateway, ReminderService, SettingsStore, StatusSink};

use crate::instance::InstanceLock;

/// Log-backed status surface.
struct TracingSink;

impl StatusSink for TracingSink {
    fn set_tooltip(&self, text: &str) {
        trace!(target: "upright::surface", "tooltip: {text}");
    }

    fn set_countdown(&self, label: &str) {
        trace!(target: "upright::surface", "{label}");
    }

    fn set_interval(&self, label: &str) {
        info!(target: "upright::surface", "{label}");
    }
}

/// Map a menu-surface line onto a command.
fn parse_command(line: &str) -> Option<Command> {
    match line.trim() {
        "+1m" => Some(Command::Adjust(1)),
        "-1m" => Some(Command::Adjust(-1)),
        "+5m" => Some(Command::Adjust(5)),
        "-5m" => Some(Command::Adjust(-5)),
        "+30m" => Some(Command::Adjust(30)),
        "-30m" => Some(Command::Adjust(-30)),
        "+1h" => Some(Command::Adjust(60)),
        "-1h" => Some(Command::Adjust(-60)),
        "reset" => Some(Command::ResetInterval),
        "about" => Some(Command::About),
        "quit" | "q" | "exit" => Some(Command::Quit),
        "" => None,
        other => {
            warn!("unknown command: {other}");
            None
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = SettingsStore::open()?;

    // Another copy already running is the expected path, not a failure:
    // exit quietly with status 0 before starting any loops.
    let Some(_lock) = InstanceLock::acquire(store.dir()) else {
        return Ok(());
    };

    ensure_resources(&store);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let service = ReminderService::new(store, Gateway::desktop(), Arc::new(TracingSink));
        match serde_json::to_string(&service.snapshot()) {
            Ok(snapshot) => info!(%snapshot, "reminder loop starting"),
            Err(e) => warn!("could not serialize startup snapshot: {e}"),
        }

        let (tx, rx) = mpsc::channel(16);

        let stdin_tx = tx.clone();
        tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                if let Some(cmd) = parse_command(&line) {
                    let quitting = cmd == Command::Quit;
                    if stdin_tx.send(cmd).await.is_err() || quitting {
                        break;
                    }
                }
            }
        });

        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = tx.send(Command::Quit).await;
            }
        });

        service.run(rx).await;
    });

    Ok(())
}
