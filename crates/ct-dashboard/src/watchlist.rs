//! Watched coin ids, persisted under the `watchlist` key

use ct_models::CoinDetail;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::{LocalStore, WATCHLIST_KEY};

/// Coin ids in the order they were added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watchlist {
  ids: Vec<String>,
}

impl Watchlist {
  pub fn load(store: &LocalStore) -> Result<Self> {
    Ok(store.get(WATCHLIST_KEY)?.unwrap_or_default())
  }

  pub fn save(&self, store: &mut LocalStore) -> Result<()> {
    store.set(WATCHLIST_KEY, self)
  }

  pub fn ids(&self) -> &[String] {
    &self.ids
  }

  pub fn len(&self) -> usize {
    self.ids.len()
  }

  pub fn is_empty(&self) -> bool {
    self.ids.is_empty()
  }

  pub fn contains(&self, coin_id: &str) -> bool {
    self.ids.iter().any(|id| id == coin_id)
  }

  /// Returns `false` if the coin was already watched
  pub fn add(&mut self, coin_id: &str) -> bool {
    if self.contains(coin_id) {
      return false;
    }
    self.ids.push(coin_id.to_string());
    true
  }

  /// Returns `false` if the coin was not watched
  pub fn remove(&mut self, coin_id: &str) -> bool {
    let before = self.ids.len();
    self.ids.retain(|id| id != coin_id);
    self.ids.len() != before
  }

  /// Add or remove; returns whether the coin is watched afterwards
  pub fn toggle(&mut self, coin_id: &str) -> bool {
    if self.remove(coin_id) {
      false
    } else {
      self.add(coin_id)
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WatchlistStats {
  pub total: usize,
  pub gainers: usize,
  pub losers: usize,
}

impl WatchlistStats {
  /// Counts over the coins that could be fetched
  pub fn from_coins(coins: &[CoinDetail]) -> Self {
    let changes: Vec<f64> = coins.iter().map(|c| c.change_24h().unwrap_or(0.0)).collect();
    Self {
      total: coins.len(),
      gainers: changes.iter().filter(|c| **c > 0.0).count(),
      losers: changes.iter().filter(|c| **c < 0.0).count(),
    }
  }
}
