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

//! End-to-end fetch cycles against a mock currencyapi.com service

use fx_core::Config;
use fx_importer::{
  CredentialProvider, CurrencyApiImporter, PlainTextDecryptor, RateImporter, StaticCurrencyCodes,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Credential store that counts how often the importer asks for the key.
struct CountingCredentials {
  key: String,
  lookups: Arc<AtomicUsize>,
}

impl CredentialProvider for CountingCredentials {
  fn api_key(&self) -> String {
    self.lookups.fetch_add(1, Ordering::SeqCst);
    self.key.clone()
  }

  fn timeout_secs(&self) -> u64 {
    5
  }
}

fn importer_for(
  base_url: &str,
  key: &str,
  bases: &[&str],
  targets: &[&str],
) -> (
  CurrencyApiImporter<CountingCredentials, PlainTextDecryptor, StaticCurrencyCodes>,
  Arc<AtomicUsize>,
) {
  let lookups = Arc::new(AtomicUsize::new(0));
  let config = Config {
    api_key: key.to_string(),
    timeout_secs: 5,
    base_url: base_url.to_string(),
  };
  let credentials = CountingCredentials { key: key.to_string(), lookups: Arc::clone(&lookups) };
  let codes = StaticCurrencyCodes::new(
    bases.iter().map(|s| s.to_string()).collect(),
    targets.iter().map(|s| s.to_string()).collect(),
  );

  let importer = CurrencyApiImporter::new(&config, credentials, PlainTextDecryptor, codes).unwrap();
  (importer, lookups)
}

#[tokio::test]
async fn test_full_cycle_returns_quoted_and_identity_rates() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v3/latest"))
    .and(query_param("apikey", "k"))
    .and(query_param("base_currency", "USD"))
    .respond_with(ResponseTemplate::new(200).set_body_raw(
      r#"{"meta":{"last_updated_at":"2025-06-30T23:59:59Z"},"data":{"EUR":{"code":"EUR","value":0.92},"KRW":{"code":"KRW","value":1324.0528424423}}}"#,
      "application/json",
    ))
    .expect(1)
    .mount(&server)
    .await;

  let (mut importer, _) =
    importer_for(&server.uri(), "k", &["USD"], &["USD", "EUR", "KRW"]);
  let table = importer.fetch_rates().await;

  let usd = &table["USD"];
  assert_eq!(usd["USD"], Some(1.0));
  assert_eq!(usd["EUR"], Some(0.92));
  assert_eq!(usd["KRW"], Some(1324.052_842));
  assert!(importer.messages().is_empty());
}

#[tokio::test]
async fn test_unquoted_pair_is_null_with_message() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v3/latest"))
    .respond_with(ResponseTemplate::new(200).set_body_raw(
      r#"{"data":{"EUR":{"code":"EUR","value":0.92}}}"#,
      "application/json",
    ))
    .expect(1)
    .mount(&server)
    .await;

  let (mut importer, _) = importer_for(&server.uri(), "k", &["USD"], &["EUR", "KRW"]);
  let table = importer.fetch_rates().await;

  let usd = &table["USD"];
  assert_eq!(usd["EUR"], Some(0.92));
  assert_eq!(usd["KRW"], None);

  let messages = importer.messages();
  assert_eq!(messages.len(), 1);
  assert!(messages[0].contains("KRW"));
  assert!(messages[0].contains("127.0.0.1"));
}

#[tokio::test]
async fn test_service_errors_null_quoted_pairs_but_keep_identity() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v3/latest"))
    .respond_with(ResponseTemplate::new(422).set_body_raw(
      r#"{"errors":[["Invalid base currency."]]}"#,
      "application/json",
    ))
    .expect(1)
    .mount(&server)
    .await;

  let (mut importer, _) = importer_for(&server.uri(), "k", &["USD"], &["USD", "EUR", "KRW"]);
  let table = importer.fetch_rates().await;

  // Identity pairs never consult the body, so USD -> USD survives the
  // invalid response while every quoted pair degrades to null.
  let usd = &table["USD"];
  assert_eq!(usd["USD"], Some(1.0));
  assert_eq!(usd["EUR"], None);
  assert_eq!(usd["KRW"], None);

  let messages = importer.messages();
  assert!(messages.iter().any(|m| m == "Invalid base currency."));
}

#[tokio::test]
async fn test_empty_api_key_skips_network_entirely() {
  let server = MockServer::start().await;
  Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

  let (mut importer, _) = importer_for(&server.uri(), "", &["USD"], &["USD", "EUR"]);
  let table = importer.fetch_rates().await;

  let usd = &table["USD"];
  assert_eq!(usd["USD"], None);
  assert_eq!(usd["EUR"], None);

  assert_eq!(
    importer.messages(),
    ["No API Key was specified or an invalid API Key was specified."]
  );
}

#[tokio::test]
async fn test_key_resolved_once_across_bases() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v3/latest"))
    .respond_with(ResponseTemplate::new(200).set_body_raw(
      r#"{"data":{"EUR":{"code":"EUR","value":0.92}}}"#,
      "application/json",
    ))
    .expect(2)
    .mount(&server)
    .await;

  let (mut importer, lookups) = importer_for(&server.uri(), "k", &["USD", "GBP"], &["EUR"]);
  let table = importer.fetch_rates().await;

  assert_eq!(table.len(), 2);
  // The request URL is resolved and cached on the first base, so the
  // credential store is consulted exactly once for the whole cycle.
  assert_eq!(lookups.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unreachable_service_keeps_identity_rate() {
  // Bind then drop so the port is very likely unoccupied.
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let base_url = format!("http://{}", listener.local_addr().unwrap());
  drop(listener);

  let (mut importer, _) = importer_for(&base_url, "k", &["USD"], &["USD", "EUR"]);
  let table = importer.fetch_rates().await;

  let usd = &table["USD"];
  assert_eq!(usd["USD"], Some(1.0));
  assert_eq!(usd["EUR"], None);

  let messages = importer.messages();
  assert_eq!(messages.len(), 1);
  assert!(messages[0].contains("EUR"));
}
