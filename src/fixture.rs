//! Marketplace order records.
//!
//! Orders come from marketplace APIs (e.g. OpenSea listings) as JSON objects carrying
//! the signed Seaport order under `protocol_data`:
//!
//! ```json
//! {
//!   "order_hash": "0x...",
//!   "protocol_data": {
//!     "parameters": { "offerer": "0x...", "offer": [...], "consideration": [...], "counter": 0, ... },
//!     "signature": "0x..."
//!   }
//! }
//! ```
//!
//! [`RawOrder`] mirrors that shape and names only the fields the Seaport order is made
//! of, everything else (including the offerer `counter`, which is not a part of the
//! on-chain order struct) is dropped while deserializing. Addresses, hashes and the
//! signature are deserialized as hex strings directly; integers are accepted both as
//! JSON numbers of any size and as decimal or `0x`-prefixed strings.
//!
//! Records are converted into [`types::Order`] with [`TryFrom`], which reports the first
//! malformed integer or enum tag as [`Error::Parse`].

use std::{fs::File, io::BufReader, path::Path, str::FromStr};

use alloy::primitives::{Address, B256, Bytes, U256};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::{Error, Result},
    types,
};

/// Order record as returned by the marketplace API.
#[derive(Clone, Debug, Deserialize)]
pub struct RawOrder {
    pub protocol_data: RawProtocolData,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawProtocolData {
    pub parameters: RawOrderParameters,
    pub signature: Bytes,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOrderParameters {
    pub offerer: Address,
    pub zone: Address,
    pub offer: Vec<RawItem>,
    pub consideration: Vec<RawItem>,
    pub order_type: RawUint,
    pub start_time: RawUint,
    pub end_time: RawUint,
    pub zone_hash: B256,
    pub salt: RawUint,
    pub conduit_key: B256,
    pub total_original_consideration_items: RawUint,
}

/// Offer or consideration item, `recipient` is present on consideration items only.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    pub item_type: RawUint,
    pub token: Address,
    pub identifier_or_criteria: RawUint,
    pub start_amount: RawUint,
    pub end_amount: RawUint,
    pub recipient: Option<Address>,
}

/// Unsigned integer encoded either as a JSON number or as a string.
///
/// Numbers keep their literal digits (`arbitrary_precision`), so amounts above
/// `u64::MAX` written as plain numbers are not rounded through `f64`.
#[derive(Clone, Debug, Deserialize)]
#[serde(transparent)]
pub struct RawUint(Value);

impl RawUint {
    fn to_u256(&self, field: &str) -> Result<U256> {
        match &self.0 {
            Value::Number(n) => U256::from_str(&n.to_string()).map_err(|e| Error::parse(field, e)),
            Value::String(s) => U256::from_str(s.trim()).map_err(|e| Error::parse(field, e)),
            other => Err(Error::parse(field, format!("expected integer, got {other}"))),
        }
    }

    fn to_u8(&self, field: &str) -> Result<u8> {
        u8::try_from(self.to_u256(field)?).map_err(|_| Error::parse(field, "out of range"))
    }
}

/// Parse a JSON array of order records, or a single record.
pub fn from_str(json: &str) -> Result<Vec<RawOrder>> {
    records(serde_json::from_str(json)?)
}

/// Same as [`from_str`], reading from `reader`.
pub fn from_reader(reader: impl std::io::Read) -> Result<Vec<RawOrder>> {
    records(serde_json::from_reader(reader)?)
}

/// Same as [`from_str`], reading the file at `path`.
pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<RawOrder>> {
    from_reader(BufReader::new(File::open(path)?))
}

// Picks the JSON shape first, so that record errors (e.g. a missing field)
// reach the caller as reported by serde.
fn records(value: Value) -> Result<Vec<RawOrder>> {
    Ok(match value {
        Value::Array(_) => serde_json::from_value(value)?,
        _ => vec![serde_json::from_value(value)?],
    })
}

impl TryFrom<&RawOrder> for types::Order {
    type Error = Error;

    fn try_from(value: &RawOrder) -> Result<Self> {
        let raw = &value.protocol_data;
        Ok(types::Order::new(
            types::OrderParameters::try_from(&raw.parameters)?,
            raw.signature.clone(),
        ))
    }
}

impl TryFrom<&RawOrderParameters> for types::OrderParameters {
    type Error = Error;

    fn try_from(value: &RawOrderParameters) -> Result<Self> {
        let offer = value
            .offer
            .iter()
            .enumerate()
            .map(|(idx, item)| offer_item(item, &format!("offer[{idx}]")))
            .collect::<Result<_>>()?;
        let consideration = value
            .consideration
            .iter()
            .enumerate()
            .map(|(idx, item)| consideration_item(item, &format!("consideration[{idx}]")))
            .collect::<Result<_>>()?;
        let order_type = value.order_type.to_u8("orderType")?;

        Ok(types::OrderParameters {
            offerer: value.offerer,
            zone: value.zone,
            offer,
            consideration,
            order_type: types::OrderType::try_from(order_type)
                .map_err(|t| Error::parse("orderType", format!("unknown order type {t}")))?,
            start_time: value.start_time.to_u256("startTime")?,
            end_time: value.end_time.to_u256("endTime")?,
            zone_hash: value.zone_hash,
            salt: value.salt.to_u256("salt")?,
            conduit_key: value.conduit_key,
            total_original_consideration_items: value
                .total_original_consideration_items
                .to_u256("totalOriginalConsiderationItems")?,
        })
    }
}

fn offer_item(item: &RawItem, path: &str) -> Result<types::OfferItem> {
    let item_type = item.item_type.to_u8(&format!("{path}.itemType"))?;
    Ok(types::OfferItem {
        item_type: types::ItemType::try_from(item_type).map_err(|t| {
            Error::parse(format!("{path}.itemType"), format!("unknown item type {t}"))
        })?,
        token: item.token,
        identifier_or_criteria: item
            .identifier_or_criteria
            .to_u256(&format!("{path}.identifierOrCriteria"))?,
        start_amount: item.start_amount.to_u256(&format!("{path}.startAmount"))?,
        end_amount: item.end_amount.to_u256(&format!("{path}.endAmount"))?,
    })
}

fn consideration_item(item: &RawItem, path: &str) -> Result<types::ConsiderationItem> {
    let recipient = item
        .recipient
        .ok_or_else(|| Error::parse(format!("{path}.recipient"), "missing"))?;
    let offer = offer_item(item, path)?;
    Ok(types::ConsiderationItem {
        item_type: offer.item_type,
        token: offer.token,
        identifier_or_criteria: offer.identifier_or_criteria,
        start_amount: offer.start_amount,
        end_amount: offer.end_amount,
        recipient,
    })
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, b256, bytes};

    use super::*;
    use crate::types::{ItemType, OrderType};

    const ORDER: &str = r#"{
        "order_hash": "0x1111111111111111111111111111111111111111111111111111111111111111",
        "protocol_data": {
            "parameters": {
                "offerer": "0x00000000000000000000000000000000000000f0",
                "offer": [{
                    "itemType": 2,
                    "token": "0x0000000000000000000000000000000000000c01",
                    "identifierOrCriteria": "4321",
                    "startAmount": "1",
                    "endAmount": "1"
                }],
                "consideration": [{
                    "itemType": 0,
                    "token": "0x0000000000000000000000000000000000000000",
                    "identifierOrCriteria": "0",
                    "startAmount": "97500000000000000",
                    "endAmount": "97500000000000000",
                    "recipient": "0x00000000000000000000000000000000000000f0"
                }, {
                    "itemType": 0,
                    "token": "0x0000000000000000000000000000000000000000",
                    "identifierOrCriteria": "0",
                    "startAmount": "0x58d15e176280000",
                    "endAmount": "0x58d15e176280000",
                    "recipient": "0x0000a26b00c1f0df003000390027140000faa719"
                }],
                "orderType": 2,
                "startTime": "1656000000",
                "endTime": 1720000000,
                "zone": "0x004c00500000ad104d7dbd00e3ae0a5c00560c00",
                "zoneHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
                "salt": "12686911856931635052326433555881236148",
                "conduitKey": "0x0000007b02230091a7ed01230072f7006a004d60a8d4e71d599b8104250f0000",
                "totalOriginalConsiderationItems": 2,
                "counter": 7
            },
            "signature": "0xabcdef"
        }
    }"#;

    #[test]
    fn test_parse_single_record() {
        let raw = from_str(ORDER).unwrap();
        assert_eq!(raw.len(), 1);

        let order = types::Order::try_from(&raw[0]).unwrap();
        let params = &order.parameters;
        assert_eq!(
            params.offerer,
            address!("0x00000000000000000000000000000000000000f0")
        );
        assert_eq!(
            params.zone,
            address!("0x004c00500000ad104d7dbd00e3ae0a5c00560c00")
        );
        assert_eq!(params.order_type, OrderType::FullRestricted);
        assert_eq!(params.offer[0].item_type, ItemType::Erc721);
        assert_eq!(params.offer[0].identifier_or_criteria, U256::from(4321));
        assert_eq!(params.consideration.len(), 2);
        assert_eq!(
            params.consideration[1].start_amount,
            U256::from(400_000_000_000_000_000u64)
        );
        assert_eq!(
            params.consideration[1].recipient,
            address!("0x0000a26b00c1f0df003000390027140000faa719")
        );
        assert_eq!(params.start_time, U256::from(1_656_000_000u64));
        assert_eq!(params.end_time, U256::from(1_720_000_000u64));
        assert_eq!(
            params.salt,
            U256::from(12686911856931635052326433555881236148u128)
        );
        assert_eq!(
            params.conduit_key,
            b256!("0x0000007b02230091a7ed01230072f7006a004d60a8d4e71d599b8104250f0000")
        );
        assert_eq!(params.total_original_consideration_items, U256::from(2));
        assert_eq!(order.signature, bytes!("0xabcdef"));
    }

    #[test]
    fn test_parse_array() {
        let raw = from_str(&format!("[{ORDER}, {ORDER}]")).unwrap();
        assert_eq!(raw.len(), 2);
    }

    #[test]
    fn test_counter_does_not_affect_order() {
        let with_other_counter = ORDER.replace(r#""counter": 7"#, r#""counter": 8"#);
        let without_counter = ORDER
            .replace(
                r#""totalOriginalConsiderationItems": 2,"#,
                r#""totalOriginalConsiderationItems": 2"#,
            )
            .replace(r#""counter": 7"#, "");
        let a = types::Order::try_from(&from_str(ORDER).unwrap()[0]).unwrap();
        let b = types::Order::try_from(&from_str(&with_other_counter).unwrap()[0]).unwrap();
        let c = types::Order::try_from(&from_str(&without_counter).unwrap()[0]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_missing_field() {
        let json = ORDER.replace(r#""signature": "0xabcdef""#, r#""sig": "0xabcdef""#);
        let err = from_str(&json).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("missing field `signature`"), "{err}");

        let json = format!("[{ORDER}, {}]", ORDER.replace(r#""zone": "#, r#""zoneAddress": "#));
        let err = from_str(&json).unwrap_err();
        assert!(err.to_string().contains("missing field `zone`"), "{err}");
    }

    #[test]
    fn test_large_numeric_amount() {
        let json = ORDER.replace(r#""97500000000000000""#, "20000000000000000000");
        let order = types::Order::try_from(&from_str(&json).unwrap()[0]).unwrap();
        let item = &order.parameters.consideration[0];
        assert_eq!(item.start_amount, U256::from(20_000_000_000_000_000_000u128));
        assert_eq!(item.end_amount, U256::from(20_000_000_000_000_000_000u128));
        assert_eq!(
            order.value().unwrap(),
            U256::from(20_400_000_000_000_000_000u128)
        );
    }

    #[test]
    fn test_fractional_amount() {
        let json = ORDER.replace(r#""startAmount": "1""#, r#""startAmount": 1.5"#);
        let raw = from_str(&json).unwrap();
        match types::Order::try_from(&raw[0]) {
            Err(Error::Parse { field, .. }) => assert_eq!(field, "offer[0].startAmount"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_recipient() {
        let json = ORDER.replace(
            r#""recipient": "0x00000000000000000000000000000000000000f0""#,
            r#""note": "none""#,
        );
        let raw = from_str(&json).unwrap();
        match types::Order::try_from(&raw[0]) {
            Err(Error::Parse { field, .. }) => assert_eq!(field, "consideration[0].recipient"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_address() {
        let json = ORDER.replace(
            "0x0000a26b00c1f0df003000390027140000faa719",
            "0x0000a26b00c1f0df",
        );
        assert!(matches!(from_str(&json), Err(Error::Json(_))));
    }

    #[test]
    fn test_unknown_item_type() {
        let json = ORDER.replace(r#""itemType": 2"#, r#""itemType": 9"#);
        let raw = from_str(&json).unwrap();
        match types::Order::try_from(&raw[0]) {
            Err(Error::Parse { field, .. }) => assert_eq!(field, "offer[0].itemType"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
