pub mod config;
pub mod error;
pub mod exec_limit;

pub use config::Config;
pub use error::{Error, Result};
pub use exec_limit::ExecLimitGuard;

/// Base URL for the currencyapi.com service
pub const CURRENCY_API_BASE_URL: &str = "https://api.currencyapi.com";

/// Query template for the latest-rates endpoint. Placeholders are filled in
/// by the importer; the currency list placeholder receives the target codes
/// joined with a percent-encoded comma.
pub const LATEST_RATES_QUERY: &str =
  "/v3/latest?apikey={{ACCESS_KEY}}&currencies={{CURRENCY_RATES}}&base_currency={{BASE_CURRENCY}}";

/// Default request timeout in seconds for rate lookups
pub const DEFAULT_TIMEOUT_SECS: u64 = 100;

/// Total tries per rate request: the first call plus one immediate retry
pub const MAX_REQUEST_ATTEMPTS: u32 = 2;

/// Decimal places kept when formatting a rate
pub const RATE_DECIMAL_PRECISION: i32 = 6;

/// Round a raw rate to the standard decimal precision.
///
/// All rates entering a rate table go through this, including the fixed `1`
/// for an identity pair.
pub fn number_format(value: f64) -> f64 {
  let factor = 10f64.powi(RATE_DECIMAL_PRECISION);
  (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_number_format_rounds_to_precision() {
    assert_eq!(number_format(2.052_842_442_3), 2.052_842);
    assert_eq!(number_format(1324.052_842_442_3), 1324.052_842);
    assert_eq!(number_format(1.0), 1.0);
  }

  #[test]
  fn test_number_format_keeps_short_values() {
    assert_eq!(number_format(0.92), 0.92);
    assert_eq!(number_format(1324.05), 1324.05);
  }

  #[test]
  fn test_latest_rates_query_placeholders() {
    assert!(LATEST_RATES_QUERY.contains("{{ACCESS_KEY}}"));
    assert!(LATEST_RATES_QUERY.contains("{{CURRENCY_RATES}}"));
    assert!(LATEST_RATES_QUERY.contains("{{BASE_CURRENCY}}"));
  }
}
