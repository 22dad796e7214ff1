//! Dashboard preferences, persisted under the `dashboardSettings` key

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};
use crate::store::{LocalStore, SETTINGS_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
  #[default]
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
  pub price_alerts: bool,
  pub news_updates: bool,
  pub sound_enabled: bool,
}

impl Default for NotificationSettings {
  fn default() -> Self {
    Self { price_alerts: true, news_updates: true, sound_enabled: true }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
  pub analytics: bool,
  pub personalized_ads: bool,
}

impl Default for PrivacySettings {
  fn default() -> Self {
    Self { analytics: true, personalized_ads: false }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
  pub theme: Theme,
  pub currency: String,
  pub notifications: NotificationSettings,
  pub privacy: PrivacySettings,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      theme: Theme::default(),
      currency: "USD".to_string(),
      notifications: NotificationSettings::default(),
      privacy: PrivacySettings::default(),
    }
  }
}

/// Keys accepted by [`Settings::set`]
pub const SETTING_KEYS: [&str; 7] = [
  "theme",
  "currency",
  "notifications.priceAlerts",
  "notifications.newsUpdates",
  "notifications.soundEnabled",
  "privacy.analytics",
  "privacy.personalizedAds",
];

fn parse_flag(key: &str, value: &str) -> Result<bool> {
  match value.trim().to_ascii_lowercase().as_str() {
    "true" | "on" | "yes" | "1" => Ok(true),
    "false" | "off" | "no" | "0" => Ok(false),
    _ => Err(DashboardError::Validation(format!("{} expects true or false, got '{}'", key, value))),
  }
}

impl Settings {
  pub fn load(store: &LocalStore) -> Result<Self> {
    Ok(store.get(SETTINGS_KEY)?.unwrap_or_default())
  }

  pub fn save(&self, store: &mut LocalStore) -> Result<()> {
    store.set(SETTINGS_KEY, self)
  }

  /// Update one setting from its dotted key, e.g. `notifications.soundEnabled`
  pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
    match key {
      "theme" => {
        self.theme = serde_json::from_value(serde_json::Value::String(value.trim().to_lowercase()))
          .map_err(|_| DashboardError::Validation(format!("theme must be dark, light or auto, got '{}'", value)))?;
      }
      "currency" => {
        let currency = value.trim();
        if currency.is_empty() {
          return Err(DashboardError::Validation("currency must not be empty".to_string()));
        }
        self.currency = currency.to_uppercase();
      }
      "notifications.priceAlerts" => self.notifications.price_alerts = parse_flag(key, value)?,
      "notifications.newsUpdates" => self.notifications.news_updates = parse_flag(key, value)?,
      "notifications.soundEnabled" => self.notifications.sound_enabled = parse_flag(key, value)?,
      "privacy.analytics" => self.privacy.analytics = parse_flag(key, value)?,
      "privacy.personalizedAds" => self.privacy.personalized_ads = parse_flag(key, value)?,
      other => {
        return Err(DashboardError::Validation(format!(
          "unknown setting '{}', expected one of {}",
          other,
          SETTING_KEYS.join(", ")
        )))
      }
    }
    Ok(())
  }
}
