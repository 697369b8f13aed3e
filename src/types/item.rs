use alloy::primitives::{Address, U256};

use crate::{
    abi::seaport,
    error::{Error, Result},
};

/// Kind of asset an offer or consideration item transfers.
///
/// * [`ItemType::Native`] is the chain's native currency; `token` is the zero address.
/// * [`ItemType::Erc20`], [`ItemType::Erc721`], [`ItemType::Erc1155`] are plain token transfers
///   where `identifier_or_criteria` is the token ID (zero for ERC-20).
/// * [`ItemType::Erc721WithCriteria`] and [`ItemType::Erc1155WithCriteria`] carry a merkle root
///   of acceptable token IDs and require criteria resolvers, which this crate never supplies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemType {
    Native,
    Erc20,
    Erc721,
    Erc1155,
    Erc721WithCriteria,
    Erc1155WithCriteria,
}

impl TryFrom<u8> for ItemType {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(ItemType::Native),
            1 => Ok(ItemType::Erc20),
            2 => Ok(ItemType::Erc721),
            3 => Ok(ItemType::Erc1155),
            4 => Ok(ItemType::Erc721WithCriteria),
            5 => Ok(ItemType::Erc1155WithCriteria),
            other => Err(other),
        }
    }
}

/// Asset offered by the order creator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OfferItem {
    pub item_type: ItemType,
    pub token: Address,
    pub identifier_or_criteria: U256,
    pub start_amount: U256,
    pub end_amount: U256,
}

/// Payment owed to `recipient` as a condition of the order being fulfilled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsiderationItem {
    pub item_type: ItemType,
    pub token: Address,
    pub identifier_or_criteria: U256,
    pub start_amount: U256,
    pub end_amount: U256,
    pub recipient: Address,
}

impl ConsiderationItem {
    /// Whether both items transfer the same asset, i.e. could be settled
    /// by one aggregated transfer to a shared recipient.
    pub fn same_asset(&self, other: &ConsiderationItem) -> bool {
        self.item_type == other.item_type
            && self.token == other.token
            && self.identifier_or_criteria == other.identifier_or_criteria
    }
}

/// Native value that has to accompany fulfillment of the given consideration,
/// i.e. the sum of every item's start amount.
pub fn consideration_value(items: &[ConsiderationItem]) -> Result<U256> {
    items.iter().try_fold(U256::ZERO, |acc, item| {
        acc.checked_add(item.start_amount)
            .ok_or(Error::ValueOverflow)
    })
}

impl From<&OfferItem> for seaport::OfferItem {
    fn from(value: &OfferItem) -> Self {
        seaport::OfferItem {
            itemType: value.item_type as u8,
            token: value.token,
            identifierOrCriteria: value.identifier_or_criteria,
            startAmount: value.start_amount,
            endAmount: value.end_amount,
        }
    }
}

impl From<&ConsiderationItem> for seaport::ConsiderationItem {
    fn from(value: &ConsiderationItem) -> Self {
        seaport::ConsiderationItem {
            itemType: value.item_type as u8,
            token: value.token,
            identifierOrCriteria: value.identifier_or_criteria,
            startAmount: value.start_amount,
            endAmount: value.end_amount,
            recipient: value.recipient,
        }
    }
}
