//! Market listing search, sort and summary

use ct_models::CoinMarket;
use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::DashboardError;

/// Column the market table is sorted by, always descending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
  #[default]
  MarketCap,
  Price,
  Volume,
  Change,
}

impl SortKey {
  pub fn as_str(&self) -> &'static str {
    match self {
      SortKey::MarketCap => "market_cap",
      SortKey::Price => "price",
      SortKey::Volume => "volume",
      SortKey::Change => "change",
    }
  }

  fn value(&self, coin: &CoinMarket) -> f64 {
    match self {
      SortKey::MarketCap => coin.market_cap,
      SortKey::Price => coin.current_price,
      SortKey::Volume => coin.total_volume,
      SortKey::Change => coin.price_change_percentage_24h,
    }
    .unwrap_or(0.0)
  }
}

impl FromStr for SortKey {
  type Err = DashboardError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "market_cap" | "marketcap" | "cap" => Ok(SortKey::MarketCap),
      "price" => Ok(SortKey::Price),
      "volume" => Ok(SortKey::Volume),
      "change" => Ok(SortKey::Change),
      other => Err(DashboardError::Validation(format!(
        "unknown sort key '{}', expected market_cap, price, volume or change",
        other
      ))),
    }
  }
}

/// Coins whose name or symbol contains `term`, ignoring case. A blank term keeps everything.
pub fn filter_coins<'a>(coins: &'a [CoinMarket], term: &str) -> Vec<&'a CoinMarket> {
  let term = term.trim().to_lowercase();
  coins
    .iter()
    .filter(|c| {
      term.is_empty() || c.name.to_lowercase().contains(&term) || c.symbol.to_lowercase().contains(&term)
    })
    .collect()
}

/// Sort descending by `key`; missing values sort as zero
pub fn sort_coins(coins: &mut [&CoinMarket], key: SortKey) {
  coins.sort_by(|a, b| key.value(b).partial_cmp(&key.value(a)).unwrap_or(Ordering::Equal));
}

/// Search then sort, the way the markets page presents its table
pub fn search_and_sort<'a>(coins: &'a [CoinMarket], term: &str, key: SortKey) -> Vec<&'a CoinMarket> {
  let mut matched = filter_coins(coins, term);
  sort_coins(&mut matched, key);
  matched
}

/// Counts shown above the market table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarketStats {
  pub total: usize,
  pub gainers: usize,
  pub losers: usize,
}

impl MarketStats {
  pub fn from_coins<'a>(coins: impl IntoIterator<Item = &'a CoinMarket>) -> Self {
    coins.into_iter().fold(Self::default(), |mut stats, coin| {
      stats.total += 1;
      let change = coin.change_24h();
      if change > 0.0 {
        stats.gainers += 1;
      } else if change < 0.0 {
        stats.losers += 1;
      }
      stats
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use serde_json::json;

  fn coin(id: &str, symbol: &str, name: &str, cap: f64, price: f64, volume: f64, change: f64) -> CoinMarket {
    serde_json::from_value(json!({
      "id": id,
      "symbol": symbol,
      "name": name,
      "market_cap": cap,
      "current_price": price,
      "total_volume": volume,
      "price_change_percentage_24h": change,
    }))
    .unwrap()
  }

  fn sample() -> Vec<CoinMarket> {
    vec![
      coin("ethereum", "eth", "Ethereum", 400e9, 3200.0, 15e9, -1.5),
      coin("bitcoin", "btc", "Bitcoin", 1.2e12, 64000.0, 30e9, 2.1),
      coin("dogecoin", "doge", "Dogecoin", 20e9, 0.15, 40e9, 8.0),
      coin("tether", "usdt", "Tether", 110e9, 1.0, 50e9, 0.0),
    ]
  }

  fn ids(coins: &[&CoinMarket]) -> Vec<String> {
    coins.iter().map(|c| c.id.clone()).collect()
  }

  #[test]
  fn test_filter_matches_name_or_symbol() {
    let coins = sample();
    assert_eq!(ids(&filter_coins(&coins, "BIT")), vec!["bitcoin"]);
    assert_eq!(ids(&filter_coins(&coins, "usdt")), vec!["tether"]);
    assert_eq!(ids(&filter_coins(&coins, "coin")), vec!["bitcoin", "dogecoin"]);
    assert_eq!(filter_coins(&coins, "  ").len(), 4);
    assert!(filter_coins(&coins, "solana").is_empty());
  }

  #[test]
  fn test_sort_keys() {
    let coins = sample();
    assert_eq!(ids(&search_and_sort(&coins, "", SortKey::default())), vec!["bitcoin", "ethereum", "tether", "dogecoin"]);
    assert_eq!(ids(&search_and_sort(&coins, "", SortKey::Price)), vec!["bitcoin", "ethereum", "tether", "dogecoin"]);
    assert_eq!(ids(&search_and_sort(&coins, "", SortKey::Volume)), vec!["tether", "dogecoin", "bitcoin", "ethereum"]);
    assert_eq!(ids(&search_and_sort(&coins, "", SortKey::Change)), vec!["dogecoin", "bitcoin", "tether", "ethereum"]);
  }

  #[test]
  fn test_sort_key_parsing() {
    assert_eq!("market_cap".parse::<SortKey>().unwrap(), SortKey::MarketCap);
    assert_eq!("Volume".parse::<SortKey>().unwrap(), SortKey::Volume);
    assert!("rank".parse::<SortKey>().is_err());
  }

  #[test]
  fn test_stats_split_gainers_and_losers() {
    let coins = sample();
    assert_eq!(MarketStats::from_coins(&coins), MarketStats { total: 4, gainers: 2, losers: 1 });
  }
}
