//! HTTP transport layer for currencyapi.com requests

use fx_core::{Error, Result, MAX_REQUEST_ATTEMPTS};
use fx_models::LatestRatesResponse;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// HTTP transport for the latest-rates endpoint.
///
/// Carries the adapter's retry policy: at most [`MAX_REQUEST_ATTEMPTS`]
/// tries per request with no delay between them.
pub struct Transport {
    client: Client,
    timeout: Duration,
}

impl Transport {
    /// Create a transport enforcing the given request timeout.
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let timeout = Duration::from_secs(timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("fx-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, timeout })
    }

    /// Fetch and decode one latest-rates response.
    ///
    /// Transport-level failures (connect, timeout, body read) are retried
    /// once immediately. A body that is not valid JSON decodes to the empty
    /// response without a retry; the rate lookup above degrades every pair
    /// of that batch. Non-2xx statuses are not short-circuited since the
    /// service reports failures inside the JSON body.
    #[instrument(skip(self, url))]
    pub async fn latest_rates(&self, url: &str) -> Result<LatestRatesResponse> {
        let mut last_error = None;

        for attempt in 1..=MAX_REQUEST_ATTEMPTS {
            match self.fetch_body(url).await {
                Ok(body) => {
                    debug!("Response body length: {} bytes", body.len());
                    return Ok(serde_json::from_str(&body).unwrap_or_else(|e| {
                        debug!("Undecodable response body: {e}");
                        LatestRatesResponse::default()
                    }));
                }
                Err(e) => {
                    warn!("Rate request failed (attempt {attempt}): {e}");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| Error::Http("request attempts exhausted".to_string())))
    }

    async fn fetch_body(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Http(format!("Request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response body: {e}")))?;
        debug!("Service answered with status {status}");
        Ok(body)
    }

    /// Request timeout the underlying client enforces.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
