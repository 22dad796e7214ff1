//! Display formatting for prices, market values, percentages and article ages

const TRILLION: f64 = 1e12;
const BILLION: f64 = 1e9;
const MILLION: f64 = 1e6;

/// Fraction digits kept by [`group_thousands`], matching a browser's default
/// en-US number formatting.
const MAX_GROUPED_FRACTION_DIGITS: usize = 3;

/// Format a large dollar amount: `$1.23T`, `$4.56B`, `$7.89M`, else grouped.
///
/// Negative values are never abbreviated, so a loss prints as `$-1,234.5`.
pub fn format_compact_currency(value: f64) -> String {
  if value >= TRILLION {
    format!("${:.2}T", value / TRILLION)
  } else if value >= BILLION {
    format!("${:.2}B", value / BILLION)
  } else if value >= MILLION {
    format!("${:.2}M", value / MILLION)
  } else {
    format!("${}", group_thousands(value))
  }
}

/// Format a unit price with precision that suits its magnitude
pub fn format_price(price: f64) -> String {
  if price >= 1000.0 {
    format!("${}", group_thousands(price))
  } else if price >= 1.0 {
    format!("${:.2}", price)
  } else {
    format!("${:.4}", price)
  }
}

/// `2.345` -> `2.35%`, sign kept for negatives
pub fn format_percentage(value: f64) -> String {
  format!("{:.2}%", value)
}

/// Like [`format_percentage`] but with an explicit `+` on gains
pub fn format_signed_percentage(value: f64) -> String {
  if value >= 0.0 {
    format!("+{:.2}%", value)
  } else {
    format_percentage(value)
  }
}

/// Age of a unix timestamp relative to `now`, e.g. `5m ago`, `3h ago`, `2d ago`
///
/// Timestamps in the future count as zero minutes old.
pub fn format_time_ago(published_on: i64, now: i64) -> String {
  let diff = (now - published_on).max(0);
  if diff < 3600 {
    format!("{}m ago", diff / 60)
  } else if diff < 86_400 {
    format!("{}h ago", diff / 3600)
  } else {
    format!("{}d ago", diff / 86_400)
  }
}

/// Comma-grouped decimal with at most three fraction digits and no trailing zeros
pub fn group_thousands(value: f64) -> String {
  if !value.is_finite() {
    return value.to_string();
  }

  let fixed = format!("{:.*}", MAX_GROUPED_FRACTION_DIGITS, value.abs());
  let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
  let frac_part = frac_part.trim_end_matches('0');

  let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
  for (i, ch) in int_part.chars().enumerate() {
    if i > 0 && (int_part.len() - i) % 3 == 0 {
      grouped.push(',');
    }
    grouped.push(ch);
  }

  let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());
  let sign = if negative { "-" } else { "" };
  if frac_part.is_empty() {
    format!("{}{}", sign, grouped)
  } else {
    format!("{}{}.{}", sign, grouped, frac_part)
  }
}
