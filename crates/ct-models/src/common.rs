use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fields an upstream record carries beyond the ones modelled explicitly
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// Error body returned by every failing proxy route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
  /// Human readable message
  pub message: String,
}

impl ErrorBody {
  pub fn new(message: impl Into<String>) -> Self {
    Self { message: message.into() }
  }
}

/// Per-currency values such as `{"usd": 64000.0, "eur": 59000.0}`
///
/// CoinGecko occasionally reports `null` for thinly traded quote currencies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyMap(pub BTreeMap<String, Option<f64>>);

impl CurrencyMap {
  /// Value in the given quote currency
  pub fn get(&self, currency: &str) -> Option<f64> {
    self.0.get(&currency.to_lowercase()).copied().flatten()
  }

  /// Value in US dollars
  pub fn usd(&self) -> Option<f64> {
    self.get(crate::USD)
  }
}

impl FromIterator<(String, f64)> for CurrencyMap {
  fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
    CurrencyMap(iter.into_iter().map(|(k, v)| (k, Some(v))).collect())
  }
}
