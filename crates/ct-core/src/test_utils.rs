/// Default tolerance for floating-point comparisons
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Assert that two floating-point numbers are approximately equal
pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64) {
  assert!(
    (actual - expected).abs() < tolerance,
    "Values not approximately equal:\n  actual:   {}\n  expected: {}\n  diff:     {}",
    actual,
    expected,
    (actual - expected).abs(),
  );
}

/// Assert that two money amounts agree to the default tolerance
pub fn assert_amount_eq(actual: f64, expected: f64) {
  assert_approx_eq(actual, expected, DEFAULT_TOLERANCE);
}

/// Assert element-wise equality of two float series, e.g. sparkline bar heights
pub fn assert_series_eq(actual: &[f64], expected: &[f64]) {
  assert_eq!(actual.len(), expected.len(), "series lengths differ: {:?} vs {:?}", actual, expected);
  for (a, e) in actual.iter().zip(expected) {
    assert_approx_eq(*a, *e, DEFAULT_TOLERANCE);
  }
}
