//! Latest-rates response models for the currencyapi.com v3 API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Two-level rate mapping: base code -> target code -> rate.
///
/// `None` marks a pair the service could not provide and is distinct from a
/// zero rate. Inner maps iterate in code order.
pub type RateTable = BTreeMap<String, BTreeMap<String, Option<f64>>>;

/// Decoded body of a `/v3/latest` call.
///
/// A successful body carries `data`, a failing one carries `errors`. A body
/// with neither is treated as a success with no quotes in it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatestRatesResponse {
    /// Response metadata; not used for rate math
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,

    /// Per-currency quotes keyed by target code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<BTreeMap<String, RateEntry>>,

    /// Error entries; the first element of each entry is the message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Vec<String>>>,
}

/// Metadata block of a successful response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// Upstream quote timestamp
    pub last_updated_at: DateTime<Utc>,
}

/// Single quote for one target currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    /// ISO 4217-style currency code
    pub code: String,

    /// Conversion rate from the requested base currency
    #[serde(deserialize_with = "f64_or_string")]
    pub value: f64,
}

// The service documents `value` as a JSON number, but numeric strings show
// up in some payloads; accept both.
fn f64_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}
