//! Batch fulfillment call preparation.
//!
//! Turns marketplace order records into a single `fulfillAvailableAdvancedOrders`
//! call buying all of them at once:
//!
//! 1. every record is normalized into a full-fill [`AdvancedOrder`] and the native
//!    value its consideration requires,
//! 2. offer and consideration fulfillment groups are computed over the whole batch
//!    (see [`crate::fulfillment`]),
//! 3. orders, groups and [`FulfillmentConfig`] parameters are ABI-encoded.
//!
//! Orders are neither validated nor checked against each other, a batch that is
//! not fulfillable on-chain still encodes successfully.

use alloy::{
    primitives::{Address, Bytes, U256},
    sol_types::SolCall,
};
use tracing::{debug, warn};

use crate::{
    FulfillmentConfig,
    abi::seaport::Seaport::fulfillAvailableAdvancedOrdersCall,
    error::{Error, Result},
    fixture::RawOrder,
    fulfillment::{self, Fulfillments},
    types::{AdvancedOrder, Order},
};

/// Prepared contract call.
#[derive(Clone, derive_more::Debug, PartialEq, Eq)]
pub struct MethodParameters {
    /// Seaport contract to call.
    pub to: Address,
    #[debug("{calldata}")]
    pub calldata: Bytes,
    /// Native value to attach to the call, in wei.
    pub value: U256,
}

/// Normalize a record into a plain signed order and the native value it requires.
pub fn build_order(raw: &RawOrder) -> Result<(Order, U256)> {
    let order = Order::try_from(raw)?;
    let value = order.value()?;
    Ok((order, value))
}

/// Normalize a record into a full-fill advanced order and the native value it requires.
pub fn build_fulfillment_from_single_order(raw: &RawOrder) -> Result<(AdvancedOrder, U256)> {
    let (order, value) = build_order(raw)?;
    Ok((order.into_advanced(), value))
}

/// Build call data fulfilling all `raw_orders` in one call, delivering offered
/// items to `recipient`.
///
/// The returned value is the sum of the values of individual orders.
pub fn build_batch_fulfillment_call_data(
    raw_orders: &[RawOrder],
    recipient: Address,
    config: &FulfillmentConfig,
) -> Result<MethodParameters> {
    let mut orders = Vec::with_capacity(raw_orders.len());
    let mut value = U256::ZERO;
    for raw in raw_orders {
        let (order, order_value) = build_fulfillment_from_single_order(raw)?;
        value = value
            .checked_add(order_value)
            .ok_or(Error::ValueOverflow)?;
        orders.push(order);
    }

    let calldata = fulfill_available_advanced_orders(&orders, recipient, config);
    Ok(MethodParameters {
        to: config.seaport(),
        calldata,
        value,
    })
}

/// Build call data fulfilling already normalized `orders`.
pub fn fulfill_available_advanced_orders(
    orders: &[AdvancedOrder],
    recipient: Address,
    config: &FulfillmentConfig,
) -> Bytes {
    let offer = fulfillment::offer_fulfillments(orders);
    let consideration = fulfillment::consideration_fulfillments(orders);

    for idx in fulfillment::heterogeneous_groups(orders, &consideration) {
        warn!(
            group = idx,
            components = ?consideration[idx],
            "Consideration group mixes different assets, fulfillment will revert"
        );
    }
    debug!(
        orders = orders.len(),
        offer_groups = offer.len(),
        consideration_groups = consideration.len(),
        %recipient,
        "Prepared fulfillAvailableAdvancedOrders call"
    );

    encode_fulfill_available_advanced_orders(orders, &offer, &consideration, recipient, config)
}

/// ABI-encode the call from precomputed fulfillment groups.
///
/// Criteria resolvers are always empty, criteria-based items are not supported.
pub fn encode_fulfill_available_advanced_orders(
    orders: &[AdvancedOrder],
    offer: &Fulfillments,
    consideration: &Fulfillments,
    recipient: Address,
    config: &FulfillmentConfig,
) -> Bytes {
    fulfillAvailableAdvancedOrdersCall {
        advancedOrders: orders.iter().map(Into::into).collect(),
        criteriaResolvers: vec![],
        offerFulfillments: fulfillment::to_abi(offer),
        considerationFulfillments: fulfillment::to_abi(consideration),
        fulfillerConduitKey: config.conduit_key(),
        recipient,
        maximumFulfilled: U256::from(config.max_fulfilled()),
    }
    .abi_encode()
    .into()
}

/// Decode call data produced by [`encode_fulfill_available_advanced_orders`].
pub fn decode_fulfill_available_advanced_orders(
    calldata: &[u8],
) -> Result<fulfillAvailableAdvancedOrdersCall> {
    Ok(fulfillAvailableAdvancedOrdersCall::abi_decode(calldata)?)
}
