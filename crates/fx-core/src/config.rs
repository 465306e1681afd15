//! Configuration management for the currencyapi.com importer

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the currencyapi.com importer
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// currencyapi.com API key in its stored form.
  ///
  /// May be empty; an empty key makes the importer skip the network call and
  /// record an operator message instead of failing hard.
  pub api_key: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Base URL for the currencyapi.com service
  pub base_url: String,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key = env::var("CURRENCY_API_KEY").unwrap_or_default();

    let timeout_secs = env::var("CURRENCY_API_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid CURRENCY_API_TIMEOUT_SECS".to_string()))?;

    let base_url =
      env::var("CURRENCY_API_BASE_URL").unwrap_or_else(|_| crate::CURRENCY_API_BASE_URL.to_string());

    Ok(Config { api_key, timeout_secs, base_url })
  }

  /// Create a config with default values (for testing)
  pub fn default_with_key(api_key: String) -> Self {
    Config {
      api_key,
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      base_url: crate::CURRENCY_API_BASE_URL.to_string(),
    }
  }
}
