//! Test utilities.
//!
//! [`OrderBuilder`] and [`ConsiderationBuilder`] provide a convenient way to create
//! orders with controlled values for unit testing fulfillment grouping and value
//! aggregation, without going through fixture parsing.
//!

use alloy::primitives::{Address, B256, Bytes, U256, address};

use crate::{
    OPENSEA_CONDUIT_KEY,
    types::{ConsiderationItem, ItemType, OfferItem, Order, OrderParameters, OrderType},
};

const OFFERER: Address = address!("0x0000000000000000000000000000000000000f0f");
const COLLECTION: Address = address!("0x0000000000000000000000000000000000000c01");

/// Builder for [`ConsiderationItem`], defaulting to a native currency payment.
#[derive(Clone, Debug)]
pub struct ConsiderationBuilder {
    item: ConsiderationItem,
}

impl ConsiderationBuilder {
    /// Native payment of `amount` wei to `recipient`.
    pub fn native(recipient: Address, amount: u64) -> Self {
        Self {
            item: ConsiderationItem {
                item_type: ItemType::Native,
                token: Address::ZERO,
                identifier_or_criteria: U256::ZERO,
                start_amount: U256::from(amount),
                end_amount: U256::from(amount),
                recipient,
            },
        }
    }

    pub fn item_type(mut self, item_type: ItemType) -> Self {
        self.item.item_type = item_type;
        self
    }

    pub fn token(mut self, token: Address) -> Self {
        self.item.token = token;
        self
    }

    pub fn identifier(mut self, identifier: U256) -> Self {
        self.item.identifier_or_criteria = identifier;
        self
    }

    pub fn start_amount(mut self, amount: U256) -> Self {
        self.item.start_amount = amount;
        self
    }

    pub fn end_amount(mut self, amount: U256) -> Self {
        self.item.end_amount = amount;
        self
    }

    pub fn build(self) -> ConsiderationItem {
        self.item
    }
}

/// Builder for [`Order`]s offering a single ERC-721 token from a fixed collection.
#[derive(Clone, Debug)]
pub struct OrderBuilder {
    offerer: Address,
    token_id: U256,
    consideration: Vec<ConsiderationItem>,
    order_type: OrderType,
    salt: U256,
    total_original_consideration_items: Option<U256>,
    signature: Bytes,
}

impl Default for OrderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBuilder {
    pub fn new() -> Self {
        Self {
            offerer: OFFERER,
            token_id: U256::from(1),
            consideration: Vec::new(),
            order_type: OrderType::FullOpen,
            salt: U256::ZERO,
            total_original_consideration_items: None,
            signature: Bytes::new(),
        }
    }

    pub fn offerer(mut self, offerer: Address) -> Self {
        self.offerer = offerer;
        self
    }

    pub fn token_id(mut self, token_id: u64) -> Self {
        self.token_id = U256::from(token_id);
        self
    }

    pub fn consideration(mut self, item: ConsiderationItem) -> Self {
        self.consideration.push(item);
        self
    }

    /// Native payments to each of `recipients`, `amount` wei each.
    pub fn pays(mut self, recipients: &[Address], amount: u64) -> Self {
        self.consideration.extend(
            recipients
                .iter()
                .map(|r| ConsiderationBuilder::native(*r, amount).build()),
        );
        self
    }

    pub fn order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = order_type;
        self
    }

    pub fn salt(mut self, salt: u64) -> Self {
        self.salt = U256::from(salt);
        self
    }

    /// Override the signed consideration length, defaults to the number of added items.
    pub fn total_original_consideration_items(mut self, total: u64) -> Self {
        self.total_original_consideration_items = Some(U256::from(total));
        self
    }

    pub fn signature(mut self, signature: Bytes) -> Self {
        self.signature = signature;
        self
    }

    pub fn build(self) -> Order {
        let total = self
            .total_original_consideration_items
            .unwrap_or(U256::from(self.consideration.len()));
        Order::new(
            OrderParameters {
                offerer: self.offerer,
                zone: Address::ZERO,
                offer: vec![OfferItem {
                    item_type: ItemType::Erc721,
                    token: COLLECTION,
                    identifier_or_criteria: self.token_id,
                    start_amount: U256::from(1),
                    end_amount: U256::from(1),
                }],
                consideration: self.consideration,
                order_type: self.order_type,
                start_time: U256::from(1_656_000_000u64),
                end_time: U256::from(1_720_000_000u64),
                zone_hash: B256::ZERO,
                salt: self.salt,
                conduit_key: OPENSEA_CONDUIT_KEY,
                total_original_consideration_items: total,
            },
            self.signature,
        )
    }
}
