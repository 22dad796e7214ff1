/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Local price alerts, persisted under the `priceAlerts` key
//!
//! Alerts are never evaluated by the server. [`AlertBook::check`] compares them
//! against prices the caller has already fetched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{DashboardError, Result};
use crate::store::{ALERTS_KEY, LocalStore};

/// Direction the price has to move through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
  #[default]
  Above,
  Below,
}

impl fmt::Display for AlertKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AlertKind::Above => write!(f, "above"),
      AlertKind::Below => write!(f, "below"),
    }
  }
}

impl FromStr for AlertKind {
  type Err = DashboardError;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_ascii_lowercase().as_str() {
      "above" => Ok(AlertKind::Above),
      "below" => Ok(AlertKind::Below),
      other => Err(DashboardError::Validation(format!("alert type must be above or below, got '{}'", other))),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAlert {
  /// Creation time in epoch milliseconds, as a string
  pub id: String,
  pub coin_id: String,
  pub coin_name: String,
  pub coin_symbol: String,
  pub coin_image: String,
  #[serde(rename = "type")]
  pub kind: AlertKind,
  pub price: f64,
  pub is_active: bool,
  pub created_at: DateTime<Utc>,
}

impl PriceAlert {
  /// Whether `current_price` has reached the target
  pub fn is_triggered_by(&self, current_price: f64) -> bool {
    match self.kind {
      AlertKind::Above => current_price >= self.price,
      AlertKind::Below => current_price <= self.price,
    }
  }
}

/// User input for a new alert
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewAlert {
  /// Defaults to the lowercased symbol
  pub coin_id: Option<String>,
  pub coin_name: String,
  pub coin_symbol: String,
  /// Defaults to the CoinGecko image route for the coin
  pub coin_image: Option<String>,
  pub kind: AlertKind,
  pub price: Option<f64>,
}

impl NewAlert {
  fn validate(&self) -> Result<f64> {
    let price = self.price.filter(|p| p.is_finite() && *p > 0.0);
    match price {
      Some(price) if !self.coin_name.trim().is_empty() && !self.coin_symbol.trim().is_empty() => Ok(price),
      _ => Err(DashboardError::Validation("Please fill in all required fields".to_string())),
    }
  }
}

/// Default image for an alert whose coin has no image URL
pub fn default_coin_image(coin_id: &str) -> String {
  format!("{}/coins/{}/image", ct_core::COINGECKO_BASE_URL, coin_id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlertStats {
  pub total: usize,
  pub active: usize,
  pub above: usize,
  pub below: usize,
}

/// An active alert whose condition holds at the given price
#[derive(Debug, Clone, PartialEq)]
pub struct TriggeredAlert<'a> {
  pub alert: &'a PriceAlert,
  pub current_price: f64,
}

/// All alerts, in creation order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertBook {
  alerts: Vec<PriceAlert>,
}

impl AlertBook {
  pub fn load(store: &LocalStore) -> Result<Self> {
    Ok(store.get(ALERTS_KEY)?.unwrap_or_default())
  }

  pub fn save(&self, store: &mut LocalStore) -> Result<()> {
    store.set(ALERTS_KEY, self)
  }

  pub fn alerts(&self) -> &[PriceAlert] {
    &self.alerts
  }

  pub fn is_empty(&self) -> bool {
    self.alerts.is_empty()
  }

  /// Validate and append a new active alert created at `now`
  pub fn add(&mut self, new: NewAlert, now: DateTime<Utc>) -> Result<&PriceAlert> {
    let price = new.validate()?;

    let coin_id = new
      .coin_id
      .filter(|id| !id.trim().is_empty())
      .unwrap_or_else(|| new.coin_symbol.trim().to_lowercase());
    let coin_image = new
      .coin_image
      .filter(|img| !img.trim().is_empty())
      .unwrap_or_else(|| default_coin_image(&coin_id));

    // ids are millisecond timestamps; bump on a same-millisecond collision
    let mut millis = now.timestamp_millis();
    while self.alerts.iter().any(|a| a.id == millis.to_string()) {
      millis += 1;
    }

    self.alerts.push(PriceAlert {
      id: millis.to_string(),
      coin_id,
      coin_name: new.coin_name.trim().to_string(),
      coin_symbol: new.coin_symbol.trim().to_string(),
      coin_image,
      kind: new.kind,
      price,
      is_active: true,
      created_at: now,
    });
    self.alerts.last().ok_or_else(|| DashboardError::NotFound("alert".to_string()))
  }

  /// Flip an alert on or off; returns the new state
  pub fn toggle(&mut self, id: &str) -> Result<bool> {
    let alert = self
      .alerts
      .iter_mut()
      .find(|a| a.id == id)
      .ok_or_else(|| DashboardError::NotFound(format!("alert {}", id)))?;
    alert.is_active = !alert.is_active;
    Ok(alert.is_active)
  }

  pub fn delete(&mut self, id: &str) -> Result<PriceAlert> {
    let index = self
      .alerts
      .iter()
      .position(|a| a.id == id)
      .ok_or_else(|| DashboardError::NotFound(format!("alert {}", id)))?;
    Ok(self.alerts.remove(index))
  }

  pub fn stats(&self) -> AlertStats {
    AlertStats {
      total: self.alerts.len(),
      active: self.alerts.iter().filter(|a| a.is_active).count(),
      above: self.alerts.iter().filter(|a| a.kind == AlertKind::Above).count(),
      below: self.alerts.iter().filter(|a| a.kind == AlertKind::Below).count(),
    }
  }

  /// Distinct coin ids of active alerts, for fetching prices
  pub fn active_coin_ids(&self) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for alert in self.alerts.iter().filter(|a| a.is_active) {
      if !ids.contains(&alert.coin_id) {
        ids.push(alert.coin_id.clone());
      }
    }
    ids
  }

  /// Active alerts crossed by the current prices, keyed by coin id.
  /// Coins without a price are skipped.
  pub fn check(&self, prices: &HashMap<String, f64>) -> Vec<TriggeredAlert<'_>> {
    self
      .alerts
      .iter()
      .filter(|a| a.is_active)
      .filter_map(|alert| {
        let current_price = *prices.get(&alert.coin_id)?;
        alert.is_triggered_by(current_price).then_some(TriggeredAlert { alert, current_price })
      })
      .collect()
  }
}
