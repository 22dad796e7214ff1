//! Mini bar charts built from the 7-day sparkline series

/// Points kept from the end of the series
pub const SPARKLINE_POINTS: usize = 7;

const MIN_BAR_HEIGHT: f64 = 5.0;
const BAR_SPAN: f64 = 20.0;
const FLAT_BAR_HEIGHT: f64 = 12.0;

const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
  Up,
  Down,
}

/// Bar heights between 5 and 25 plus the overall direction
#[derive(Debug, Clone, PartialEq)]
pub struct SparklineBars {
  pub heights: Vec<f64>,
  pub trend: Trend,
}

impl SparklineBars {
  /// Build bars from a full price series
  ///
  /// Scale and trend come from the whole series; only the last seven points are drawn.
  pub fn from_prices(prices: &[f64]) -> Self {
    let recent = &prices[prices.len().saturating_sub(SPARKLINE_POINTS)..];

    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    let heights = recent
      .iter()
      .map(|v| if range > 0.0 { (v - min) / range * BAR_SPAN + MIN_BAR_HEIGHT } else { FLAT_BAR_HEIGHT })
      .collect();

    let trend = match (prices.first(), prices.last()) {
      (Some(first), Some(last)) if prices.len() >= 2 && last < first => Trend::Down,
      _ => Trend::Up,
    };

    Self { heights, trend }
  }

  pub fn is_empty(&self) -> bool {
    self.heights.is_empty()
  }

  /// Render as unicode block characters for terminal output
  pub fn render(&self) -> String {
    self.heights.iter().map(|h| block((h - MIN_BAR_HEIGHT) / BAR_SPAN)).collect()
  }
}

fn block(fraction: f64) -> char {
  let level = (fraction * (BLOCKS.len() - 1) as f64).round();
  BLOCKS[(level.max(0.0) as usize).min(BLOCKS.len() - 1)]
}

/// Block characters scaled over the whole series, for longer price charts
pub fn render_series(values: &[f64]) -> String {
  let min = values.iter().copied().fold(f64::INFINITY, f64::min);
  let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
  let range = max - min;
  values.iter().map(|v| if range > 0.0 { block((v - min) / range) } else { BLOCKS[BLOCKS.len() / 2] }).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use ct_core::test_utils::assert_series_eq;

  #[test]
  fn test_draws_last_seven_points_scaled_over_series() {
    let prices: Vec<f64> = (0..=20).map(f64::from).collect();
    let bars = SparklineBars::from_prices(&prices);
    assert_eq!(bars.heights.len(), 7);
    assert_series_eq(&bars.heights, &[19.0, 20.0, 21.0, 22.0, 23.0, 24.0, 25.0]);
    assert_eq!(bars.trend, Trend::Up);
  }

  #[test]
  fn test_week_long_rise_with_late_dip_trends_up() {
    let mut prices: Vec<f64> = (0..=100).map(f64::from).collect();
    prices.extend((94..=99).rev().map(f64::from));
    let bars = SparklineBars::from_prices(&prices);
    assert_eq!(bars.trend, Trend::Up);
    assert_series_eq(&bars.heights, &[25.0, 24.8, 24.6, 24.4, 24.2, 24.0, 23.8]);
  }

  #[test]
  fn test_flat_series_uses_mid_height() {
    let bars = SparklineBars::from_prices(&[3.0, 3.0, 3.0]);
    assert_series_eq(&bars.heights, &[12.0, 12.0, 12.0]);
    assert_eq!(bars.trend, Trend::Up);
  }

  #[test]
  fn test_falling_series_trends_down() {
    let prices = [10.0, 8.0, 9.0, 4.0, 6.0, 5.0, 7.0, 3.0, 2.0];
    let bars = SparklineBars::from_prices(&prices);
    assert_eq!(bars.trend, Trend::Down);
    // drawn: 9, 4, 6, 5, 7, 3, 2 over the full 2..10 range
    assert_series_eq(&bars.heights, &[22.5, 10.0, 15.0, 12.5, 17.5, 7.5, 5.0]);
  }

  #[test]
  fn test_short_and_empty_series() {
    let single = SparklineBars::from_prices(&[42.0]);
    assert_series_eq(&single.heights, &[12.0]);
    assert_eq!(single.trend, Trend::Up);

    let empty = SparklineBars::from_prices(&[]);
    assert!(empty.is_empty());
    assert_eq!(empty.render(), "");
  }

  #[test]
  fn test_render_spans_blocks() {
    let bars = SparklineBars::from_prices(&[1.0, 2.0]);
    assert_eq!(bars.render(), "▁█");
  }

  #[test]
  fn test_render_series() {
    assert_eq!(render_series(&[10.0, 20.0, 15.0]), "▁█▅");
    assert_eq!(render_series(&[4.0, 4.0]), "▅▅");
    assert_eq!(render_series(&[]), "");
  }
}
