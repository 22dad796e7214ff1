//! Portfolio entries as exchanged with the proxy

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored (coin, quantity, buy price) record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioEntry {
  pub id: i64,
  pub user_id: String,
  pub coin_id: String,
  pub quantity: f64,
  pub buy_price: f64,
  pub created_at: DateTime<Utc>,
}

impl PortfolioEntry {
  /// What the position cost when it was bought
  pub fn cost_basis(&self) -> f64 {
    self.quantity * self.buy_price
  }
}

/// Body of `POST /api/portfolio`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolioEntry {
  pub coin_id: String,
  pub quantity: f64,
  pub buy_price: f64,
}

impl NewPortfolioEntry {
  pub fn new(coin_id: impl Into<String>, quantity: f64, buy_price: f64) -> Self {
    Self { coin_id: coin_id.into(), quantity, buy_price }
  }

  /// Check the entry before it is stored; the message is safe to show users
  pub fn validate(&self) -> Result<(), String> {
    if self.coin_id.trim().is_empty() {
      return Err("coinId is required".to_string());
    }
    if !self.quantity.is_finite() || self.quantity <= 0.0 {
      return Err("quantity must be a positive number".to_string());
    }
    if !self.buy_price.is_finite() || self.buy_price < 0.0 {
      return Err("buyPrice must be a non-negative number".to_string());
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  #[test]
  fn test_wire_names_are_camel_case() {
    let entry = PortfolioEntry {
      id: 7,
      user_id: "user1".to_string(),
      coin_id: "bitcoin".to_string(),
      quantity: 0.5,
      buy_price: 60000.0,
      created_at: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
    };
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["userId"], "user1");
    assert_eq!(json["coinId"], "bitcoin");
    assert_eq!(json["buyPrice"], 60000.0);
    assert_eq!(json["createdAt"], "2025-01-02T03:04:05Z");
    assert_eq!(entry.cost_basis(), 30000.0);
  }

  #[test]
  fn test_new_entry_from_request_body() {
    let body: NewPortfolioEntry =
      serde_json::from_str(r#"{"coinId": "ethereum", "quantity": 2, "buyPrice": 3000.5}"#).unwrap();
    assert_eq!(body, NewPortfolioEntry::new("ethereum", 2.0, 3000.5));
    assert!(body.validate().is_ok());
  }

  #[test]
  fn test_new_entry_validation() {
    assert!(NewPortfolioEntry::new(" ", 1.0, 1.0).validate().is_err());
    assert!(NewPortfolioEntry::new("bitcoin", 0.0, 1.0).validate().is_err());
    assert!(NewPortfolioEntry::new("bitcoin", f64::NAN, 1.0).validate().is_err());
    assert!(NewPortfolioEntry::new("bitcoin", 1.0, -5.0).validate().is_err());
    assert!(NewPortfolioEntry::new("bitcoin", 1.0, 0.0).validate().is_ok());
  }
}
