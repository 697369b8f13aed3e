//! Seaport batch fulfillment SDK.
//!
//! # Overview
//!
//! Prepares call data buying several marketplace listings in one Seaport
//! `fulfillAvailableAdvancedOrders` call, together with the native value the call
//! has to carry.
//!
//! Use [`fixture`] to read order records as returned by marketplace APIs, then
//! [`batch::build_batch_fulfillment_call_data`] to get [`batch::MethodParameters`]
//! ready to be sent to the Seaport contract.
//!
//! The interesting part is in [`fulfillment`]: consideration items of all orders are
//! grouped by recipient, so that every recipient gets paid once per call rather than
//! once per order.
//!
//! # Limitations
//!
//! * Only full fills of the first offer item of every order are supported.
//!
//! * Criteria-based items are not supported, criteria resolvers are always empty.
//!
//! * Orders are neither validated nor checked for compatibility, see
//!   [`fulfillment::heterogeneous_groups`].
//!
//! * Nothing gets signed or submitted, call data has to be sent by the caller.

pub mod abi;
pub mod batch;
pub mod error;
pub mod fixture;
pub mod fulfillment;
pub mod num;
pub mod testing;
pub mod types;

pub use batch::{
    MethodParameters, build_batch_fulfillment_call_data, build_fulfillment_from_single_order,
};

use alloy::primitives::{Address, B256, address, b256};

/// Seaport 1.1 deployment address, same on all supported chains.
pub const SEAPORT_V1_1: Address = address!("0x00000000006c3852cbEf3e08E8dF289169EdE581");

/// Key of the OpenSea conduit, the channel OpenSea listings approve token transfers through.
pub const OPENSEA_CONDUIT_KEY: B256 =
    b256!("0x0000007b02230091a7ed01230072f7006a004d60a8d4e71d599b8104250f0000");

/// Upper bound on the number of orders a single call attempts to fulfill.
pub const DEFAULT_MAX_FULFILLED: u64 = 100;

/// Settlement parameters of the fulfillment call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FulfillmentConfig {
    seaport: Address,
    conduit_key: B256,
    max_fulfilled: u64,
}

impl FulfillmentConfig {
    /// Seaport 1.1 filled through the OpenSea conduit.
    pub fn opensea() -> Self {
        Self {
            seaport: SEAPORT_V1_1,
            conduit_key: OPENSEA_CONDUIT_KEY,
            max_fulfilled: DEFAULT_MAX_FULFILLED,
        }
    }

    /// Arbitrary deployment, e.g. a local fork or a different conduit.
    pub fn custom(seaport: Address, conduit_key: B256, max_fulfilled: u64) -> Self {
        Self {
            seaport,
            conduit_key,
            max_fulfilled,
        }
    }

    /// Address of the Seaport contract the call is sent to.
    pub fn seaport(&self) -> Address {
        self.seaport
    }

    /// Conduit the fulfiller's tokens are transferred through.
    pub fn conduit_key(&self) -> B256 {
        self.conduit_key
    }

    /// Maximum number of orders the call fulfills, the rest are skipped.
    pub fn max_fulfilled(&self) -> u64 {
        self.max_fulfilled
    }
}

impl Default for FulfillmentConfig {
    fn default() -> Self {
        Self::opensea()
    }
}
