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

//! Collaborator seams the importer pulls its inputs from and pushes its
//! results to

use fx_core::Config;
use fx_models::RateTable;

/// Supplies the stored service credential and request timeout.
pub trait CredentialProvider {
  /// API key as stored, possibly still encrypted.
  fn api_key(&self) -> String;

  /// Request timeout in seconds for the rate service.
  fn timeout_secs(&self) -> u64;
}

/// Reverses whatever at-rest protection the credential store applies.
pub trait Decryptor {
  fn decrypt(&self, value: &str) -> String;
}

/// Supplies the base and target currency code lists for a fetch cycle.
pub trait CurrencyCodeSource {
  fn base_currencies(&self) -> Vec<String>;
  fn target_currencies(&self) -> Vec<String>;
}

/// Receives the finished rate table and any operator messages.
pub trait RateSink {
  fn store(&mut self, rates: &RateTable, messages: &[String]);
}

/// Credential provider backed by the process [`Config`].
pub struct ConfigCredentials {
  config: Config,
}

impl ConfigCredentials {
  pub fn new(config: Config) -> Self {
    Self { config }
  }
}

impl CredentialProvider for ConfigCredentials {
  fn api_key(&self) -> String {
    self.config.api_key.clone()
  }

  fn timeout_secs(&self) -> u64 {
    self.config.timeout_secs
  }
}

/// Decryptor for credentials stored in the clear.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextDecryptor;

impl Decryptor for PlainTextDecryptor {
  fn decrypt(&self, value: &str) -> String {
    value.to_string()
  }
}

/// Fixed currency code lists known up front.
pub struct StaticCurrencyCodes {
  bases: Vec<String>,
  targets: Vec<String>,
}

impl StaticCurrencyCodes {
  pub fn new(bases: Vec<String>, targets: Vec<String>) -> Self {
    Self { bases, targets }
  }
}

impl CurrencyCodeSource for StaticCurrencyCodes {
  fn base_currencies(&self) -> Vec<String> {
    self.bases.clone()
  }

  fn target_currencies(&self) -> Vec<String> {
    self.targets.clone()
  }
}
