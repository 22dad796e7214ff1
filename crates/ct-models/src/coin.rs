//! CoinGecko coin listing and coin detail models

use crate::common::{CurrencyMap, Extra};
use serde::{Deserialize, Serialize};

/// One row of `/coins/markets`: the market summary of a single asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinMarket {
  /// CoinGecko id, e.g. `bitcoin`
  pub id: String,

  /// Ticker symbol in lowercase, e.g. `btc`
  pub symbol: String,

  /// Display name
  pub name: String,

  /// Logo URL
  #[serde(default)]
  pub image: Option<String>,

  /// Current price in the quote currency
  #[serde(default)]
  pub current_price: Option<f64>,

  /// Market capitalisation
  #[serde(default)]
  pub market_cap: Option<f64>,

  /// Rank by market capitalisation
  #[serde(default)]
  pub market_cap_rank: Option<u32>,

  /// Traded volume over 24 hours
  #[serde(default)]
  pub total_volume: Option<f64>,

  #[serde(default)]
  pub high_24h: Option<f64>,

  #[serde(default)]
  pub low_24h: Option<f64>,

  /// Absolute price change over 24 hours
  #[serde(default)]
  pub price_change_24h: Option<f64>,

  /// Relative price change over 24 hours, in percent
  #[serde(default)]
  pub price_change_percentage_24h: Option<f64>,

  #[serde(default)]
  pub circulating_supply: Option<f64>,

  /// Seven days of hourly prices, present when `sparkline=true`
  #[serde(default)]
  pub sparkline_in_7d: Option<Sparkline>,

  #[serde(default)]
  pub last_updated: Option<String>,

  /// Everything else CoinGecko sent
  #[serde(flatten)]
  pub extra: Extra,
}

impl CoinMarket {
  /// Sparkline prices, empty when the listing was fetched without them
  pub fn sparkline_prices(&self) -> &[f64] {
    self.sparkline_in_7d.as_ref().map(|s| s.price.as_slice()).unwrap_or(&[])
  }

  /// 24h change, treating a missing value as flat
  pub fn change_24h(&self) -> f64 {
    self.price_change_percentage_24h.unwrap_or(0.0)
  }
}

/// Sparkline series attached to a market row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sparkline {
  #[serde(default)]
  pub price: Vec<f64>,
}

/// `/coins/{id}`: extended metadata and market statistics for one asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinDetail {
  pub id: String,
  pub symbol: String,
  pub name: String,

  #[serde(default)]
  pub market_cap_rank: Option<u32>,

  #[serde(default)]
  pub categories: Vec<Option<String>>,

  #[serde(default)]
  pub description: Option<Description>,

  #[serde(default)]
  pub image: Option<CoinImage>,

  #[serde(default)]
  pub links: Option<CoinLinks>,

  #[serde(default)]
  pub market_data: Option<MarketData>,

  #[serde(flatten)]
  pub extra: Extra,
}

impl CoinDetail {
  /// Current USD price, if CoinGecko reported market data
  pub fn current_price_usd(&self) -> Option<f64> {
    self.market_data.as_ref().and_then(|m| m.current_price.usd())
  }

  /// 24h change in percent, if reported
  pub fn change_24h(&self) -> Option<f64> {
    self.market_data.as_ref().and_then(|m| m.price_change_percentage_24h)
  }

  /// English description, if any
  pub fn description_en(&self) -> Option<&str> {
    self.description.as_ref().map(|d| d.en.as_str()).filter(|d| !d.is_empty())
  }
}

/// Localised descriptions; only English is modelled
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Description {
  #[serde(default)]
  pub en: String,

  #[serde(flatten)]
  pub extra: Extra,
}

/// Logo in three sizes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinImage {
  #[serde(default)]
  pub thumb: Option<String>,
  #[serde(default)]
  pub small: Option<String>,
  #[serde(default)]
  pub large: Option<String>,
}

/// Project links
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinLinks {
  #[serde(default)]
  pub homepage: Vec<String>,

  #[serde(default)]
  pub blockchain_site: Vec<String>,

  #[serde(default)]
  pub subreddit_url: Option<String>,

  #[serde(default)]
  pub twitter_screen_name: Option<String>,

  #[serde(default)]
  pub facebook_username: Option<String>,

  #[serde(default)]
  pub telegram_channel_identifier: Option<String>,

  #[serde(default)]
  pub repos_url: Option<ReposUrl>,

  #[serde(flatten)]
  pub extra: Extra,
}

/// Source repositories
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReposUrl {
  #[serde(default)]
  pub github: Vec<String>,

  #[serde(flatten)]
  pub extra: Extra,
}

/// Market statistics inside a coin detail
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
  #[serde(default)]
  pub current_price: CurrencyMap,

  #[serde(default)]
  pub market_cap: CurrencyMap,

  #[serde(default)]
  pub total_volume: CurrencyMap,

  #[serde(default)]
  pub high_24h: CurrencyMap,

  #[serde(default)]
  pub low_24h: CurrencyMap,

  #[serde(default)]
  pub ath: CurrencyMap,

  #[serde(default)]
  pub atl: CurrencyMap,

  #[serde(default)]
  pub price_change_percentage_24h: Option<f64>,

  #[serde(default)]
  pub price_change_percentage_7d: Option<f64>,

  #[serde(default)]
  pub price_change_percentage_30d: Option<f64>,

  #[serde(default)]
  pub price_change_percentage_1y: Option<f64>,

  #[serde(default)]
  pub circulating_supply: Option<f64>,

  #[serde(default)]
  pub total_supply: Option<f64>,

  #[serde(default)]
  pub max_supply: Option<f64>,

  #[serde(flatten)]
  pub extra: Extra,
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use serde_json::json;

  #[test]
  fn test_market_row_keeps_unmodelled_fields() {
    let raw = json!({
      "id": "bitcoin",
      "symbol": "btc",
      "name": "Bitcoin",
      "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
      "current_price": 64000.0,
      "market_cap": 1.26e12,
      "market_cap_rank": 1,
      "total_volume": 3.1e10,
      "price_change_percentage_24h": -1.25,
      "ath_date": "2024-03-14T07:10:36.635Z",
      "roi": null,
      "sparkline_in_7d": { "price": [63000.0, 63500.0, 64000.0] }
    });

    let coin: CoinMarket = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(coin.market_cap_rank, Some(1));
    assert_eq!(coin.sparkline_prices(), &[63000.0, 63500.0, 64000.0]);
    assert_eq!(coin.change_24h(), -1.25);
    assert_eq!(coin.extra.get("ath_date"), raw.get("ath_date"));

    let back = serde_json::to_value(&coin).unwrap();
    assert_eq!(back["ath_date"], raw["ath_date"]);
    assert_eq!(back["sparkline_in_7d"], raw["sparkline_in_7d"]);
  }

  #[test]
  fn test_market_row_tolerates_nulls() {
    let coin: CoinMarket = serde_json::from_value(json!({
      "id": "obscure",
      "symbol": "obs",
      "name": "Obscure",
      "current_price": null,
      "market_cap_rank": null,
      "price_change_percentage_24h": null
    }))
    .unwrap();
    assert_eq!(coin.current_price, None);
    assert_eq!(coin.change_24h(), 0.0);
    assert!(coin.sparkline_prices().is_empty());
  }

  #[test]
  fn test_coin_detail_accessors() {
    let detail: CoinDetail = serde_json::from_value(json!({
      "id": "ethereum",
      "symbol": "eth",
      "name": "Ethereum",
      "market_cap_rank": 2,
      "categories": ["Smart Contract Platform", null],
      "description": { "en": "Ethereum is a decentralized platform.", "de": "" },
      "image": { "thumb": "t.png", "small": "s.png", "large": "l.png" },
      "links": {
        "homepage": ["https://ethereum.org", ""],
        "subreddit_url": "https://www.reddit.com/r/ethereum",
        "twitter_screen_name": "ethereum",
        "repos_url": { "github": ["https://github.com/ethereum/go-ethereum"], "bitbucket": [] }
      },
      "market_data": {
        "current_price": { "usd": 3100.25, "eur": 2900.0 },
        "price_change_percentage_24h": 2.5,
        "max_supply": null
      },
      "watchlist_portfolio_users": 1200000
    }))
    .unwrap();

    assert_eq!(detail.current_price_usd(), Some(3100.25));
    assert_eq!(detail.change_24h(), Some(2.5));
    assert_eq!(detail.description_en(), Some("Ethereum is a decentralized platform."));
    assert_eq!(detail.image.as_ref().and_then(|i| i.large.as_deref()), Some("l.png"));
    assert!(detail.extra.contains_key("watchlist_portfolio_users"));
    let links = detail.links.unwrap();
    assert_eq!(links.repos_url.unwrap().github.len(), 1);
  }

  #[test]
  fn test_coin_detail_without_market_data() {
    let detail: CoinDetail =
      serde_json::from_value(json!({"id": "new", "symbol": "new", "name": "New Coin"})).unwrap();
    assert_eq!(detail.current_price_usd(), None);
    assert_eq!(detail.description_en(), None);
  }
}
