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

//! # fx-importer
//!
//! Currency-rate import for currencyapi.com.
//!
//! One fetch cycle walks the configured base currencies, asks the service
//! for every target rate in a single batched request per base, and produces
//! a complete base -> target table. Pairs the service cannot quote come back
//! as `None` with an operator message; the cycle itself never fails.

pub mod currencyapi;
pub mod importer;
pub mod sources;

// Re-export commonly used types
pub use currencyapi::CurrencyApiImporter;
pub use importer::RateImporter;
pub use sources::{
  ConfigCredentials, CredentialProvider, CurrencyCodeSource, Decryptor, PlainTextDecryptor,
  RateSink, StaticCurrencyCodes,
};
