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

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use fx_core::Config;
use fx_importer::{
  ConfigCredentials, CurrencyApiImporter, PlainTextDecryptor, RateImporter, RateSink,
  StaticCurrencyCodes,
};
use fx_models::RateTable;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "fx-cli")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Fetch the latest rates for the given currency pairs
  Latest {
    /// Base currencies, comma separated
    #[arg(long, value_delimiter = ',', default_value = "USD")]
    base: Vec<String>,

    /// Target currencies, comma separated
    #[arg(long, value_delimiter = ',', default_value = "USD,EUR,GBP,JPY")]
    currencies: Vec<String>,
  },
}

/// Sink that prints the rate table as JSON and messages to stderr.
struct StdoutSink;

impl RateSink for StdoutSink {
  fn store(&mut self, rates: &RateTable, messages: &[String]) {
    match serde_json::to_string_pretty(rates) {
      Ok(json) => println!("{json}"),
      Err(e) => eprintln!("Failed to render rate table: {e}"),
    }
    for message in messages {
      eprintln!("WARNING: {message}");
    }
  }
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging
  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).init();

  // Load configuration
  let config = Config::from_env()?;

  // Execute command
  match cli.command {
    Commands::Latest { base, currencies } => fetch_latest(config, base, currencies).await?,
  }

  Ok(())
}

async fn fetch_latest(config: Config, base: Vec<String>, currencies: Vec<String>) -> Result<()> {
  let credentials = ConfigCredentials::new(config.clone());
  let codes = StaticCurrencyCodes::new(base, currencies);
  let mut importer =
    CurrencyApiImporter::new(&config, credentials, PlainTextDecryptor, codes)?;

  let rates = importer.fetch_rates().await;

  let mut sink = StdoutSink;
  sink.store(&rates, importer.messages());

  Ok(())
}
