//! Configuration for the call data builder.
//!
//! Configuration comes from two sources:
//! - Environment variables (via .env file or shell): deployment overrides, default recipient
//! - CLI arguments: order selection and call parameters

use std::path::PathBuf;

use alloy::primitives::{Address, B256, U256};
use clap::Parser;
use fastnum::{UD256, decimal::Context};
use seaport_sdk::{DEFAULT_MAX_FULFILLED, FulfillmentConfig, OPENSEA_CONDUIT_KEY, SEAPORT_V1_1, num};

/// Environment configuration.
#[derive(Debug, Default, serde::Deserialize)]
pub struct EnvConfig {
    /// Seaport contract address (default: Seaport 1.1)
    pub seaport_address: Option<String>,

    /// Conduit key used to pull the fulfiller's tokens (default: OpenSea conduit)
    pub conduit_key: Option<String>,

    /// Recipient of purchased items when not given on the command line
    pub recipient: Option<String>,
}

impl EnvConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    pub fn seaport_address(&self) -> Result<Address, ConfigError> {
        self.seaport_address
            .as_deref()
            .map(|a| a.parse().map_err(|_| ConfigError::InvalidAddress("SEAPORT_ADDRESS")))
            .unwrap_or(Ok(SEAPORT_V1_1))
    }

    pub fn conduit_key(&self) -> Result<B256, ConfigError> {
        self.conduit_key
            .as_deref()
            .map(|k| k.parse().map_err(|_| ConfigError::InvalidConduitKey))
            .unwrap_or(Ok(OPENSEA_CONDUIT_KEY))
    }
}

/// CLI arguments.
#[derive(Debug, Parser)]
#[command(name = "seaport-calldata")]
#[command(about = "Build Seaport fulfillAvailableAdvancedOrders call data for a batch of listings")]
pub struct CliConfig {
    /// JSON file with marketplace order records
    #[arg(long)]
    pub orders: PathBuf,

    /// Indices of records to include (comma-separated, e.g., "0,2")
    /// If not specified, includes all records
    #[arg(long, value_delimiter = ',')]
    pub select: Vec<usize>,

    /// Recipient of purchased items (overrides RECIPIENT)
    #[arg(long)]
    pub recipient: Option<String>,

    /// Maximum number of orders the call attempts to fulfill
    #[arg(long, default_value_t = DEFAULT_MAX_FULFILLED)]
    pub max_fulfilled: u64,

    /// Refuse to build calls requiring more than this value, in ether (e.g., "1.5")
    #[arg(long)]
    pub max_value: Option<String>,
}

impl CliConfig {
    /// Combine CLI arguments with environment configuration.
    pub fn to_fulfillment_config(&self, env: &EnvConfig) -> Result<FulfillmentConfig, ConfigError> {
        if self.max_fulfilled == 0 {
            return Err(ConfigError::ZeroMaxFulfilled);
        }
        Ok(FulfillmentConfig::custom(
            env.seaport_address()?,
            env.conduit_key()?,
            self.max_fulfilled,
        ))
    }

    pub fn recipient(&self, env: &EnvConfig) -> Result<Address, ConfigError> {
        self.recipient
            .as_deref()
            .or(env.recipient.as_deref())
            .ok_or(ConfigError::MissingRecipient)?
            .parse()
            .map_err(|_| ConfigError::InvalidAddress("recipient"))
    }

    /// Value limit in wei.
    pub fn max_value(&self) -> Result<Option<U256>, ConfigError> {
        self.max_value
            .as_deref()
            .map(|v| {
                UD256::from_str(v, Context::default())
                    .map(|ether| num::Converter::native().to_unsigned(ether))
                    .map_err(|_| ConfigError::InvalidMaxValue)
            })
            .transpose()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid address for {0}")]
    InvalidAddress(&'static str),

    #[error("Invalid conduit key")]
    InvalidConduitKey,

    #[error("Recipient is required, use --recipient or RECIPIENT")]
    MissingRecipient,

    #[error("max_fulfilled cannot be zero")]
    ZeroMaxFulfilled,

    #[error("Invalid max_value")]
    InvalidMaxValue,
}
