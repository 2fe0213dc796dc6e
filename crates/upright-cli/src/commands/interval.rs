use std::sync::Arc;

use clap::Subcommand;
use upright_core::{interval_label, IntervalController, NullSink, SettingsStore};

#[derive(Subcommand)]
pub enum IntervalAction {
    /// Print the configured interval
    Show,
    /// Set the interval in minutes (clamped to 1..=1440)
    Set {
        minutes: u32,
    },
    /// Adjust the interval by a signed number of minutes
    Adjust {
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },
    /// Reset the interval to the default (3 minutes)
    Reset,
}

pub fn run(action: IntervalAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SettingsStore::open()?;
    let config = store.load().into_shared();
    let controller = IntervalController::new(config, store, Arc::new(NullSink));

    match action {
        IntervalAction::Show => {
            println!("{}", interval_label(controller.current()));
        }
        IntervalAction::Set { minutes } => {
            println!("{}", controller.set(minutes));
        }
        IntervalAction::Adjust { delta } => {
            println!("{}", controller.adjust(delta));
        }
        IntervalAction::Reset => {
            println!("{}", controller.reset());
        }
    }
    Ok(())
}
