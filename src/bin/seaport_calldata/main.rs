//! Seaport call data builder.
//!
//! This binary reads marketplace order records from a JSON file and prints the
//! `fulfillAvailableAdvancedOrders` call buying all (or selected) orders at once.

mod config;
mod error;

use std::process::exit;

use clap::Parser;
use seaport_sdk::{MethodParameters, build_batch_fulfillment_call_data, fixture, num};
use tracing::{error, info};

use config::{CliConfig, EnvConfig};
use error::{Error, Result};

fn main() {
    // Load .env file
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Warning: Failed to load .env file: {}", e);
    }

    // Set up logging
    if std::env::var("RUST_LOG").is_err() {
        unsafe {
            std::env::set_var("RUST_LOG", "info");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli_config = CliConfig::parse();

    match run(&cli_config) {
        Ok(call) => {
            println!("to:       {}", call.to);
            println!(
                "value:    {} wei ({} ETH)",
                call.value,
                num::Converter::native().from_unsigned(call.value)
            );
            println!("calldata: {}", call.calldata);
        }
        Err(e) => {
            error!(%e, "Failed to build call data");
            exit(1);
        }
    }
}

fn run(cli_config: &CliConfig) -> Result<MethodParameters> {
    let env_config = EnvConfig::from_env()?;
    let config = cli_config.to_fulfillment_config(&env_config)?;
    let recipient = cli_config.recipient(&env_config)?;
    let max_value = cli_config.max_value()?;

    let records = fixture::from_path(&cli_config.orders)?;
    let selected = if cli_config.select.is_empty() {
        records
    } else {
        cli_config
            .select
            .iter()
            .map(|&idx| {
                records
                    .get(idx)
                    .cloned()
                    .ok_or(Error::OrderIndexOutOfRange(idx, records.len()))
            })
            .collect::<Result<Vec<_>>>()?
    };
    if selected.is_empty() {
        return Err(Error::NoOrders);
    }

    info!(
        orders = selected.len(),
        %recipient,
        seaport = %config.seaport(),
        "Building batch fulfillment"
    );
    let call = build_batch_fulfillment_call_data(&selected, recipient, &config)?;

    if let Some(limit) = max_value {
        if call.value > limit {
            return Err(Error::ValueLimitExceeded {
                required: call.value,
                limit,
            });
        }
    }

    Ok(call)
}
