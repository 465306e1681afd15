//! # fx-models
//!
//! Data models for currencyapi.com responses and the normalized rate table
//! the importer hands to the surrounding pricing system.

pub mod rates;

pub use rates::{LatestRatesResponse, RateEntry, RateTable, ResponseMeta};
