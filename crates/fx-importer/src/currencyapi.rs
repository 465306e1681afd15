/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! currencyapi.com rate importer

use async_trait::async_trait;
use fx_client::Transport;
use fx_core::{number_format, Config, ExecLimitGuard, Result, LATEST_RATES_QUERY};
use fx_models::{LatestRatesResponse, RateTable};
use std::collections::BTreeMap;
use tracing::{debug, warn};
use url::Url;

use crate::importer::RateImporter;
use crate::sources::{CredentialProvider, CurrencyCodeSource, Decryptor};

/// Rate importer for the currencyapi.com latest-rates service.
///
/// One instance performs one or more fetch cycles. The resolved request URL
/// and the service host are memoized after the first successful resolution,
/// so a key or endpoint change requires a fresh importer.
pub struct CurrencyApiImporter<C, D, S> {
  transport: Transport,
  credentials: C,
  decryptor: D,
  codes: S,
  base_url: String,
  service_url: Option<String>,
  service_host: Option<String>,
  messages: Vec<String>,
}

impl<C, D, S> CurrencyApiImporter<C, D, S>
where
  C: CredentialProvider,
  D: Decryptor,
  S: CurrencyCodeSource,
{
  /// Build an importer around the given collaborators.
  ///
  /// The request timeout comes from the credential store, matching where
  /// operators configure the service connection.
  pub fn new(config: &Config, credentials: C, decryptor: D, codes: S) -> Result<Self> {
    let transport = Transport::new(credentials.timeout_secs())?;

    Ok(Self {
      transport,
      credentials,
      decryptor,
      codes,
      base_url: config.base_url.clone(),
      service_url: None,
      service_host: None,
      messages: Vec::new(),
    })
  }

  /// Fetch one batch of rates for `base` against every target currency.
  async fn convert_batch(&mut self, base: &str, targets: &[String]) -> BTreeMap<String, Option<f64>> {
    let Some(url) = self.resolve_service_url(base, targets) else {
      return make_empty_response(targets);
    };

    let response = {
      // Long-running import work must not be cut short by an ambient
      // execution ceiling; the guard restores it once the batch is done.
      let _limit = ExecLimitGuard::unlimited();
      self.transport.latest_rates(&url).await.unwrap_or_else(|e| {
        warn!("Rate service unreachable: {e}");
        LatestRatesResponse::default()
      })
    };

    let response = if self.validate_response(&response) {
      response
    } else {
      LatestRatesResponse::default()
    };

    if let Some(meta) = &response.meta {
      debug!("Rates last updated at {}", meta.last_updated_at);
    }

    let data = response.data.unwrap_or_default();
    let host = self.service_host();
    let mut batch = BTreeMap::new();

    for to in targets {
      if to == base {
        batch.insert(to.clone(), Some(number_format(1.0)));
      } else if let Some(entry) = data.get(to) {
        batch.insert(to.clone(), Some(number_format(entry.value)));
      } else {
        self
          .messages
          .push(format!("We can't retrieve a rate from {host} for {to}."));
        batch.insert(to.clone(), None);
      }
    }

    batch
  }

  /// Resolve the request URL for `base`, memoizing the first success.
  ///
  /// A missing API key is reported per base and never cached, so every
  /// batch of the cycle carries its own operator message.
  fn resolve_service_url(&mut self, base: &str, targets: &[String]) -> Option<String> {
    if let Some(url) = &self.service_url {
      return Some(url.clone());
    }

    let api_key = self.decryptor.decrypt(&self.credentials.api_key());
    if api_key.is_empty() {
      self
        .messages
        .push("No API Key was specified or an invalid API Key was specified.".to_string());
      return None;
    }

    let url = format!("{}{}", self.base_url, LATEST_RATES_QUERY)
      .replace("{{ACCESS_KEY}}", &api_key)
      .replace("{{CURRENCY_RATES}}", &targets.join("%2C"))
      .replace("{{BASE_CURRENCY}}", base);

    self.service_url = Some(url.clone());
    Some(url)
  }

  /// Scheme and host of the rate service, for operator messages.
  fn service_host(&mut self) -> String {
    if let Some(host) = &self.service_host {
      return host.clone();
    }

    let host = Url::parse(&self.base_url)
      .ok()
      .and_then(|u| u.host_str().map(|h| format!("{}://{}", u.scheme(), h)))
      .unwrap_or_else(|| self.base_url.clone());

    self.service_host = Some(host.clone());
    host
  }

  /// A response is valid unless the service reported errors in its body.
  fn validate_response(&mut self, response: &LatestRatesResponse) -> bool {
    match &response.errors {
      None => true,
      Some(errors) => {
        for entry in errors {
          if let Some(message) = entry.first() {
            self.messages.push(message.clone());
          }
        }
        false
      }
    }
  }
}

#[async_trait]
impl<C, D, S> RateImporter for CurrencyApiImporter<C, D, S>
where
  C: CredentialProvider + Send + Sync,
  D: Decryptor + Send + Sync,
  S: CurrencyCodeSource + Send + Sync,
{
  async fn fetch_rates(&mut self) -> RateTable {
    let bases = self.codes.base_currencies();
    let targets = self.codes.target_currencies();
    let mut table = RateTable::new();

    for base in bases {
      debug!("Fetching rates for base currency {base}");
      let batch = self.convert_batch(&base, &targets).await;
      table.entry(base).or_default().extend(batch);
    }

    table
  }

  fn messages(&self) -> &[String] {
    &self.messages
  }
}

/// Batch with every target rate null, used when no request could be made.
fn make_empty_response(targets: &[String]) -> BTreeMap<String, Option<f64>> {
  targets.iter().map(|to| (to.clone(), None)).collect()
}
