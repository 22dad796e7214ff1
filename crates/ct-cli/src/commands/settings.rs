use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use ct_core::Config;
use ct_dashboard::Settings;

use super::open_store;
use crate::render;

#[derive(Args, Debug)]
pub struct SettingsCommand {
  #[command(subcommand)]
  command: Option<SettingsSubcommands>,
}

#[derive(Subcommand, Debug)]
enum SettingsSubcommands {
  /// Print current settings (default)
  Show,

  /// Change a setting, e.g. `ct settings set notifications.soundEnabled false`
  Set { key: String, value: String },

  /// Restore defaults
  Reset,
}

pub fn execute(cmd: SettingsCommand, config: Config) -> Result<()> {
  let mut store = open_store(&config)?;
  let mut settings = Settings::load(&store)?;

  match cmd.command.unwrap_or(SettingsSubcommands::Show) {
    SettingsSubcommands::Show => {}
    SettingsSubcommands::Set { key, value } => {
      settings.set(&key, &value)?;
      settings.save(&mut store)?;
      println!("{}", "Settings saved successfully!".green());
    }
    SettingsSubcommands::Reset => {
      settings = Settings::default();
      settings.save(&mut store)?;
      println!("{}", "Settings reset to defaults".green());
    }
  }

  render::heading("Settings");
  render::stat("theme", format!("{:?}", settings.theme).to_lowercase());
  render::stat("currency", &settings.currency);
  render::stat("notifications.priceAlerts", settings.notifications.price_alerts);
  render::stat("notifications.newsUpdates", settings.notifications.news_updates);
  render::stat("notifications.soundEnabled", settings.notifications.sound_enabled);
  render::stat("privacy.analytics", settings.privacy.analytics);
  render::stat("privacy.personalizedAds", settings.privacy.personalized_ads);
  render::stat("store", store.path().display());
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use ct_dashboard::settings::Theme;
  use ct_dashboard::LocalStore;
  use tempfile::TempDir;

  fn config_in(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.store_path = dir.path().join("nested").join("storage.json");
    config
  }

  fn set(key: &str, value: &str) -> SettingsCommand {
    SettingsCommand { command: Some(SettingsSubcommands::Set { key: key.to_string(), value: value.to_string() }) }
  }

  #[test]
  fn test_set_and_reset_persist() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    execute(set("theme", "light"), config.clone()).unwrap();
    execute(set("notifications.soundEnabled", "false"), config.clone()).unwrap();

    let saved = Settings::load(&LocalStore::open(&config.store_path).unwrap()).unwrap();
    assert_eq!(saved.theme, Theme::Light);
    assert!(!saved.notifications.sound_enabled);

    execute(SettingsCommand { command: Some(SettingsSubcommands::Reset) }, config.clone()).unwrap();
    let saved = Settings::load(&LocalStore::open(&config.store_path).unwrap()).unwrap();
    assert_eq!(saved, Settings::default());
  }

  #[test]
  fn test_unknown_key_leaves_store_untouched() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    assert!(execute(set("layout", "grid"), config.clone()).is_err());
    assert!(!config.store_path.exists());
  }
}
