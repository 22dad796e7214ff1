//! CoinGecko `/coins/{id}/market_chart` model

use serde::{Deserialize, Serialize};

/// A `[timestamp_ms, value]` pair
pub type ChartPoint = [f64; 2];

/// Historical price, market cap and volume series for one coin
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketChart {
  #[serde(default)]
  pub prices: Vec<ChartPoint>,

  #[serde(default)]
  pub market_caps: Vec<ChartPoint>,

  #[serde(default)]
  pub total_volumes: Vec<ChartPoint>,
}

impl MarketChart {
  /// Prices without their timestamps
  pub fn price_values(&self) -> Vec<f64> {
    self.prices.iter().map(|[_, price]| *price).collect()
  }

  /// Most recent price in the series
  pub fn latest_price(&self) -> Option<f64> {
    self.prices.last().map(|[_, price]| *price)
  }

  /// Relative change between the first and last price, in percent
  pub fn change_percentage(&self) -> Option<f64> {
    let first = self.prices.first()?[1];
    let last = self.prices.last()?[1];
    if first == 0.0 {
      return None;
    }
    Some((last - first) / first * 100.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_market_chart_series() {
    let chart: MarketChart = serde_json::from_str(
      r#"{
        "prices": [[1711929600000, 100.0], [1712016000000, 110.0], [1712102400000, 125.0]],
        "market_caps": [[1711929600000, 1000.0]],
        "total_volumes": []
      }"#,
    )
    .unwrap();

    assert_eq!(chart.price_values(), vec![100.0, 110.0, 125.0]);
    assert_eq!(chart.latest_price(), Some(125.0));
    assert_eq!(chart.change_percentage(), Some(25.0));
  }

  #[test]
  fn test_empty_chart() {
    let chart: MarketChart = serde_json::from_str("{}").unwrap();
    assert!(chart.price_values().is_empty());
    assert_eq!(chart.latest_price(), None);
    assert_eq!(chart.change_percentage(), None);
  }
}
