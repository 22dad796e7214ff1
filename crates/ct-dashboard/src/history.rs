//! Price history periods and chart summaries for the coin page

use ct_models::MarketChart;
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimePeriod {
  SevenDays,
  #[default]
  ThirtyDays,
  NinetyDays,
  OneYear,
}

impl TimePeriod {
  pub const ALL: [TimePeriod; 4] =
    [TimePeriod::SevenDays, TimePeriod::ThirtyDays, TimePeriod::NinetyDays, TimePeriod::OneYear];

  /// `days` parameter for the history route
  pub fn days(&self) -> u32 {
    match self {
      TimePeriod::SevenDays => 7,
      TimePeriod::ThirtyDays => 30,
      TimePeriod::NinetyDays => 90,
      TimePeriod::OneYear => 365,
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      TimePeriod::SevenDays => "7d",
      TimePeriod::ThirtyDays => "30d",
      TimePeriod::NinetyDays => "90d",
      TimePeriod::OneYear => "1y",
    }
  }
}

impl fmt::Display for TimePeriod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

impl FromStr for TimePeriod {
  type Err = DashboardError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    TimePeriod::ALL
      .into_iter()
      .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
      .ok_or_else(|| DashboardError::Validation(format!("unknown period '{}', expected 7d, 30d, 90d or 1y", s)))
  }
}

/// Headline numbers for a price chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSummary {
  pub first: f64,
  pub last: f64,
  pub low: f64,
  pub high: f64,
}

impl ChartSummary {
  /// `None` for an empty chart
  pub fn from_chart(chart: &MarketChart) -> Option<Self> {
    let prices = chart.price_values();
    let first = *prices.first()?;
    let last = *prices.last()?;
    let low = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let high = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(Self { first, last, low, high })
  }

  /// Change over the whole period in percent, `None` from a zero start
  pub fn change_percentage(&self) -> Option<f64> {
    (self.first != 0.0).then(|| (self.last - self.first) / self.first * 100.0)
  }
}

/// The chart is drawn in the gain colour when the 24h change is not negative
pub fn is_positive(change_24h: Option<f64>) -> bool {
  change_24h.unwrap_or(0.0) >= 0.0
}

/// Pick `points` evenly spaced values, always keeping the last one
pub fn downsample(values: &[f64], points: usize) -> Vec<f64> {
  if points == 0 || values.is_empty() {
    return Vec::new();
  }
  if values.len() <= points {
    return values.to_vec();
  }
  if points == 1 {
    return values[values.len() - 1..].to_vec();
  }
  let step = (values.len() - 1) as f64 / (points - 1) as f64;
  (0..points).map(|i| values[((i as f64 * step).round() as usize).min(values.len() - 1)]).collect()
}
