use clap::Subcommand;
use upright_core::{ReminderConfig, SettingsStore};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the settings record as JSON
    Show,
    /// Reset settings to defaults
    Reset,
    /// Print the settings file path
    Path,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SettingsStore::open()?;

    match action {
        ConfigAction::Show => {
            let config = store.load();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Reset => {
            store.save(&ReminderConfig::default())?;
            println!("config reset to defaults");
        }
        ConfigAction::Path => {
            println!("{}", store.settings_path().display());
        }
    }
    Ok(())
}
