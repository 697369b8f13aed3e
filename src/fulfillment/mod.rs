//! Fulfillment component aggregation.
//!
//! Seaport `fulfillAvailable*` entry points take the whole batch of orders plus two
//! lists of fulfillment groups. Each group references items across the batch by
//! `(order index, item index)` and gets settled as a single transfer, so every
//! consideration item of the batch must land in exactly one group, and all the items
//! of a group must share the recipient (as well as item type, token and identifier,
//! which the protocol validates on-chain).
//!
//! * [`offer_fulfillments`] - one singleton group per order, covering its first offer item.
//! * [`consideration_fulfillments`] - groups keyed by recipient, spanning all orders.
//!
//! Groups are emitted in the order their key is first seen while scanning orders in
//! batch order and items in listed order, so identical batches always produce
//! identical groupings, independent of the recipient address values.
//!
//! # Limitations
//!
//! Consideration items are partitioned by recipient only. A batch where one
//! recipient is owed different assets by different orders (e.g. ETH by one order and
//! WETH by another) is grouped without complaint and fails on-chain.
//! [`heterogeneous_groups`] detects such groups.

use std::collections::HashMap;

use alloy::primitives::{Address, U256};

use crate::{abi::seaport, types::AdvancedOrder};

#[cfg(test)]
mod tests;

/// Reference to a single item of a single order within a batch.
///
/// Indices are positional and 0-based, meaningful only together with the exact
/// ordered batch passed in the same call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FulfillmentComponent {
    pub order_index: usize,
    pub item_index: usize,
}

impl FulfillmentComponent {
    pub fn new(order_index: usize, item_index: usize) -> Self {
        Self {
            order_index,
            item_index,
        }
    }
}

impl From<(usize, usize)> for FulfillmentComponent {
    fn from((order_index, item_index): (usize, usize)) -> Self {
        Self::new(order_index, item_index)
    }
}

impl From<&FulfillmentComponent> for seaport::FulfillmentComponent {
    fn from(value: &FulfillmentComponent) -> Self {
        seaport::FulfillmentComponent {
            orderIndex: U256::from(value.order_index),
            itemIndex: U256::from(value.item_index),
        }
    }
}

/// Groups of components settled together, in first-seen order of the grouping key.
pub type Fulfillments = Vec<Vec<FulfillmentComponent>>;

/// Offer side grouping: every order contributes exactly its first offer item,
/// in a group of its own.
pub fn offer_fulfillments(orders: &[AdvancedOrder]) -> Fulfillments {
    (0..orders.len())
        .map(|order_index| vec![FulfillmentComponent::new(order_index, 0)])
        .collect()
}

/// Consideration side grouping: all consideration items of the batch grouped by
/// recipient.
///
/// Orders without consideration items contribute nothing.
pub fn consideration_fulfillments(orders: &[AdvancedOrder]) -> Fulfillments {
    let mut group_index: HashMap<Address, usize> = HashMap::new();
    let mut groups: Fulfillments = Vec::new();

    for (order_index, order) in orders.iter().enumerate() {
        for (item_index, item) in order.parameters().consideration.iter().enumerate() {
            let idx = *group_index.entry(item.recipient).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[idx].push(FulfillmentComponent::new(order_index, item_index));
        }
    }

    groups
}

/// Indices of consideration groups whose items do not all transfer the same asset.
///
/// Such groups are accepted by [`consideration_fulfillments`] but rejected by the
/// protocol at execution time. Components pointing outside of `orders` are ignored.
pub fn heterogeneous_groups(orders: &[AdvancedOrder], groups: &Fulfillments) -> Vec<usize> {
    groups
        .iter()
        .enumerate()
        .filter(|(_, group)| {
            let mut items = group.iter().filter_map(|c| {
                orders
                    .get(c.order_index)
                    .and_then(|o| o.parameters().consideration.get(c.item_index))
            });
            match items.next() {
                Some(first) => items.any(|item| !first.same_asset(item)),
                None => false,
            }
        })
        .map(|(idx, _)| idx)
        .collect()
}

/// Convert groups into the ABI representation.
pub fn to_abi(groups: &Fulfillments) -> Vec<Vec<seaport::FulfillmentComponent>> {
    groups
        .iter()
        .map(|group| group.iter().map(Into::into).collect())
        .collect()
}
