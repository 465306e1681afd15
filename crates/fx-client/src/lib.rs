//! # fx-client
//!
//! HTTP transport for the currencyapi.com latest-rates endpoint.
//!
//! The transport owns the adapter's request policy: one GET with the
//! configured timeout and at most one immediate retry on a transport-level
//! failure. Response bodies are decoded leniently; the importer above this
//! layer turns missing data into per-pair null rates rather than errors.

pub mod transport;

pub use fx_core::{Config, Error, Result};
pub use transport::Transport;
