//! # Bike Rental CLI Library
//!
//! Everything behind the `bike-rental` binary, kept in a library so it can be
//! tested without spawning a process.
//!
//! ## Module Organization
//! ```text
//! rental_cli/
//! ├── lib.rs      ◄─── You are here (run, logging setup)
//! ├── args.rs     ◄─── clap argument definitions
//! ├── config.rs   ◄─── TOML + environment configuration
//! ├── render.rs   ◄─── Text / JSON invoice output
//! └── error.rs    ◄─── CliError
//! ```
//!
//! ## Run Flow
//! ```text
//! Args ──► CliConfig::load ──► init_tracing ──► Invoice::add_items ──► render
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod render;

use std::io::Write;

use rental_core::Invoice;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use args::Args;
use config::CliConfig;
use error::{CliError, CliResult};

/// Builds the invoice described by `args` and returns the rendered output.
///
/// Does not touch logging or stdout.
pub fn price(args: &Args, config: &CliConfig) -> CliResult<String> {
    let mut invoice = Invoice::new();
    invoice.add_items(args.rentals.iter().copied())?;

    info!(
        invoice_id = %invoice.id(),
        items = invoice.item_count(),
        sub_total = %invoice.sub_total_price(),
        family_discount = invoice.applies_for_family_rental_discount(),
        total = %invoice.total_price(),
        "Invoice priced"
    );

    let format = args.format.unwrap_or(config.output.format);
    render::render(&invoice.summary(), format)
}

/// Runs the CLI: load config, start logging, price, print.
pub fn run(args: Args) -> CliResult<()> {
    let config = CliConfig::load(args.config.as_deref())?;
    init_tracing(&config)?;
    debug!(?config, "Configuration loaded");

    let output = price(&args, &config)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - overrides everything
/// - otherwise `logging.filter` from config / `BIKE_RENTAL_LOG`
///
/// Logs go to stderr so stdout carries only the invoice.
fn init_tracing(config: &CliConfig) -> CliResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .map_err(|e| CliError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use config::OutputFormat;

    #[test]
    fn test_price_text_uses_config_format() {
        let args = Args::try_parse_from(["bike-rental", "hour:10"]).unwrap();
        let output = price(&args, &CliConfig::default()).unwrap();
        assert!(output.contains("hourly"));
        assert!(output.lines().last().unwrap().ends_with("$50.00"));
    }

    #[test]
    fn test_price_flag_overrides_config_format() {
        let args =
            Args::try_parse_from(["bike-rental", "--format", "json", "day:1", "hour:1", "week:1"])
                .unwrap();
        let mut config = CliConfig::default();
        config.output.format = OutputFormat::Text;

        let output = price(&args, &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["item_count"], 3);
    }
}
