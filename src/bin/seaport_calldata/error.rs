//! Error types for the call data builder.

use alloy::primitives::U256;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Environment configuration error: {0}")]
    EnvConfig(#[from] envy::Error),

    #[error("Seaport SDK error: {0}")]
    Sdk(#[from] seaport_sdk::error::Error),

    #[error("Order index {0} out of range, fixture has {1} orders")]
    OrderIndexOutOfRange(usize, usize),

    #[error("No orders to fulfill")]
    NoOrders,

    #[error("Call requires {required} wei, limit is {limit} wei")]
    ValueLimitExceeded { required: U256, limit: U256 },
}

pub type Result<T> = std::result::Result<T, Error>;
