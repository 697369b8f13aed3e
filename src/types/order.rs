use alloy::primitives::{Address, B256, Bytes, U256, aliases::U120};

use super::*;
use crate::{abi::seaport, error::Result};

/// Fill and restriction mode of the order.
///
/// * [`OrderType::FullOpen`] and [`OrderType::PartialOpen`] can be fulfilled by anyone.
/// * [`OrderType::FullRestricted`] and [`OrderType::PartialRestricted`] additionally
///   require the order zone to approve the fulfillment.
/// * [`OrderType::Contract`] orders are generated on demand by the offerer contract.
///
/// Partial variants allow fractional fills; this crate always fulfills orders fully.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrderType {
    FullOpen,
    PartialOpen,
    FullRestricted,
    PartialRestricted,
    Contract,
}

impl TryFrom<u8> for OrderType {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(OrderType::FullOpen),
            1 => Ok(OrderType::PartialOpen),
            2 => Ok(OrderType::FullRestricted),
            3 => Ok(OrderType::PartialRestricted),
            4 => Ok(OrderType::Contract),
            other => Err(other),
        }
    }
}

/// Signed order parameters, exactly as the offerer signed them.
///
/// `total_original_consideration_items` reflects the consideration length at
/// signing time and is carried through untouched, even if tips get appended
/// to `consideration` later on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderParameters {
    pub offerer: Address,
    pub zone: Address,
    pub offer: Vec<OfferItem>,
    pub consideration: Vec<ConsiderationItem>,
    pub order_type: OrderType,
    pub start_time: U256,
    pub end_time: U256,
    pub zone_hash: B256,
    pub salt: U256,
    pub conduit_key: B256,
    pub total_original_consideration_items: U256,
}

/// Order together with the offerer's signature.
#[derive(Clone, derive_more::Debug, PartialEq, Eq)]
pub struct Order {
    pub parameters: OrderParameters,
    #[debug("{signature}")]
    pub signature: Bytes,
}

impl Order {
    pub fn new(parameters: OrderParameters, signature: Bytes) -> Self {
        Self {
            parameters,
            signature,
        }
    }

    /// Native value required to fulfill this order.
    pub fn value(&self) -> Result<U256> {
        consideration_value(&self.parameters.consideration)
    }

    /// Wrap the order for a full, non-partial fill.
    pub fn into_advanced(self) -> AdvancedOrder {
        AdvancedOrder::full(self)
    }
}

/// Order with explicit fill fraction and zone extra data.
#[derive(Clone, derive_more::Debug, PartialEq, Eq)]
pub struct AdvancedOrder {
    order: Order,
    numerator: U120,
    denominator: U120,
    #[debug("{extra_data}")]
    extra_data: Bytes,
}

impl AdvancedOrder {
    /// Fill the whole order (`1/1`) without any extra data for the zone.
    pub fn full(order: Order) -> Self {
        Self {
            order,
            numerator: U120::from(1u8),
            denominator: U120::from(1u8),
            extra_data: Bytes::new(),
        }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn parameters(&self) -> &OrderParameters {
        &self.order.parameters
    }

    pub fn signature(&self) -> &Bytes {
        &self.order.signature
    }

    pub fn numerator(&self) -> U120 {
        self.numerator
    }

    pub fn denominator(&self) -> U120 {
        self.denominator
    }

    pub fn extra_data(&self) -> &Bytes {
        &self.extra_data
    }

    pub fn into_order(self) -> Order {
        self.order
    }
}

impl From<&OrderParameters> for seaport::OrderParameters {
    fn from(value: &OrderParameters) -> Self {
        seaport::OrderParameters {
            offerer: value.offerer,
            zone: value.zone,
            offer: value.offer.iter().map(Into::into).collect(),
            consideration: value.consideration.iter().map(Into::into).collect(),
            orderType: value.order_type as u8,
            startTime: value.start_time,
            endTime: value.end_time,
            zoneHash: value.zone_hash,
            salt: value.salt,
            conduitKey: value.conduit_key,
            totalOriginalConsiderationItems: value.total_original_consideration_items,
        }
    }
}

impl From<&Order> for seaport::Order {
    fn from(value: &Order) -> Self {
        seaport::Order {
            parameters: (&value.parameters).into(),
            signature: value.signature.clone(),
        }
    }
}

impl From<&AdvancedOrder> for seaport::AdvancedOrder {
    fn from(value: &AdvancedOrder) -> Self {
        seaport::AdvancedOrder {
            parameters: value.parameters().into(),
            numerator: value.numerator,
            denominator: value.denominator,
            signature: value.order.signature.clone(),
            extraData: value.extra_data.clone(),
        }
    }
}
