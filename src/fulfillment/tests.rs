use alloy::primitives::{Address, U256, address};

use super::*;
use crate::{
    testing::{ConsiderationBuilder, OrderBuilder},
    types::ItemType,
};

const A: Address = address!("0x00000000000000000000000000000000000000aa");
const B: Address = address!("0x00000000000000000000000000000000000000bb");
const C: Address = address!("0x00000000000000000000000000000000000000cc");
const D: Address = address!("0x00000000000000000000000000000000000000dd");

fn orders(recipients: &[&[Address]]) -> Vec<AdvancedOrder> {
    recipients
        .iter()
        .enumerate()
        .map(|(i, rs)| {
            OrderBuilder::new()
                .token_id(i as u64)
                .pays(rs, 100)
                .build()
                .into_advanced()
        })
        .collect()
}

fn groups(pairs: &[&[(usize, usize)]]) -> Fulfillments {
    pairs
        .iter()
        .map(|g| g.iter().map(|&p| FulfillmentComponent::from(p)).collect())
        .collect()
}

#[test]
fn test_empty_batch() {
    assert!(offer_fulfillments(&[]).is_empty());
    assert!(consideration_fulfillments(&[]).is_empty());
}

#[test]
fn test_single_order_single_item() {
    let batch = orders(&[&[A]]);
    assert_eq!(consideration_fulfillments(&batch), groups(&[&[(0, 0)]]));
    assert_eq!(offer_fulfillments(&batch), groups(&[&[(0, 0)]]));
}

#[test]
fn test_two_orders_shared_recipients() {
    let batch = orders(&[&[A, B, C], &[B, C]]);
    assert_eq!(
        consideration_fulfillments(&batch),
        groups(&[&[(0, 0)], &[(0, 1), (1, 0)], &[(0, 2), (1, 1)]])
    );
    assert_eq!(offer_fulfillments(&batch), groups(&[&[(0, 0)], &[(1, 0)]]));
}

#[test]
fn test_groups_follow_first_seen_order() {
    // D sorts after A by address value but is seen first.
    let batch = orders(&[&[D, B], &[B], &[A, D]]);
    assert_eq!(
        consideration_fulfillments(&batch),
        groups(&[&[(0, 0), (2, 1)], &[(0, 1), (1, 0)], &[(2, 0)]])
    );
}

#[test]
fn test_recipient_first_seen_in_later_order_comes_later() {
    let batch = orders(&[&[A], &[A], &[C]]);
    let result = consideration_fulfillments(&batch);
    let recipient = |c: &FulfillmentComponent| {
        batch[c.order_index].parameters().consideration[c.item_index].recipient
    };
    let pos = |r: Address| result.iter().position(|g| recipient(&g[0]) == r).unwrap();
    assert!(pos(A) < pos(C));
}

#[test]
fn test_repeated_recipient_within_order() {
    let batch = orders(&[&[A, A, B]]);
    assert_eq!(
        consideration_fulfillments(&batch),
        groups(&[&[(0, 0), (0, 1)], &[(0, 2)]])
    );
}

#[test]
fn test_order_without_consideration() {
    let batch = orders(&[&[A], &[], &[A]]);
    assert_eq!(
        consideration_fulfillments(&batch),
        groups(&[&[(0, 0), (2, 0)]])
    );
    assert_eq!(
        offer_fulfillments(&batch),
        groups(&[&[(0, 0)], &[(1, 0)], &[(2, 0)]])
    );
}

#[test]
fn test_every_item_covered_exactly_once() {
    let batch = orders(&[&[A, B, C, D], &[D, C], &[B], &[A, A, A], &[C, D, B, A]]);
    let result = consideration_fulfillments(&batch);

    let mut seen: Vec<FulfillmentComponent> = result.iter().flatten().copied().collect();
    seen.sort();
    let mut expected: Vec<FulfillmentComponent> = batch
        .iter()
        .enumerate()
        .flat_map(|(i, o)| {
            (0..o.parameters().consideration.len()).map(move |j| FulfillmentComponent::new(i, j))
        })
        .collect();
    expected.sort();
    assert_eq!(seen, expected);

    // one recipient per group
    for group in &result {
        let recipient =
            batch[group[0].order_index].parameters().consideration[group[0].item_index].recipient;
        assert!(group.iter().all(|c| {
            batch[c.order_index].parameters().consideration[c.item_index].recipient == recipient
        }));
    }
    assert_eq!(result.len(), 4);
}

#[test]
fn test_grouping_is_deterministic() {
    let batch = orders(&[&[C, A], &[B, C], &[A, D]]);
    let first = consideration_fulfillments(&batch);
    for _ in 0..10 {
        assert_eq!(consideration_fulfillments(&batch), first);
        assert_eq!(offer_fulfillments(&batch), offer_fulfillments(&batch));
    }
}

#[test]
fn test_offer_fulfillments_shape() {
    let batch = orders(&[&[A], &[B], &[C], &[D], &[A]]);
    let result = offer_fulfillments(&batch);
    assert_eq!(result.len(), 5);
    for (k, group) in result.iter().enumerate() {
        assert_eq!(group, &vec![FulfillmentComponent::new(k, 0)]);
    }
}

#[test]
fn test_heterogeneous_groups_not_split() {
    let weth = address!("0x00000000000000000000000000000000000000ee");
    let batch = vec![
        OrderBuilder::new().pays(&[A, B], 100).build().into_advanced(),
        OrderBuilder::new()
            .consideration(
                ConsiderationBuilder::native(A, 100)
                    .item_type(ItemType::Erc20)
                    .token(weth)
                    .build(),
            )
            .pays(&[B], 5)
            .build()
            .into_advanced(),
    ];

    let result = consideration_fulfillments(&batch);
    assert_eq!(result, groups(&[&[(0, 0), (1, 0)], &[(0, 1), (1, 1)]]));
    assert_eq!(heterogeneous_groups(&batch, &result), vec![0]);
}

#[test]
fn test_group_identifiers_compared() {
    let batch = orders(&[&[A, B, C], &[B, C]]);
    let result = consideration_fulfillments(&batch);
    assert!(heterogeneous_groups(&batch, &result).is_empty());

    let nft = OrderBuilder::new()
        .consideration(
            ConsiderationBuilder::native(A, 1)
                .item_type(ItemType::Erc721)
                .identifier(U256::from(7))
                .build(),
        )
        .consideration(
            ConsiderationBuilder::native(A, 1)
                .item_type(ItemType::Erc721)
                .identifier(U256::from(8))
                .build(),
        )
        .build()
        .into_advanced();
    let batch = vec![nft];
    let result = consideration_fulfillments(&batch);
    assert_eq!(heterogeneous_groups(&batch, &result), vec![0]);
}

#[test]
fn test_to_abi() {
    let encoded = to_abi(&groups(&[&[(0, 1), (3, 2)]]));
    assert_eq!(encoded.len(), 1);
    assert_eq!(
        encoded[0],
        vec![
            seaport::FulfillmentComponent {
                orderIndex: U256::from(0),
                itemIndex: U256::from(1),
            },
            seaport::FulfillmentComponent {
                orderIndex: U256::from(3),
                itemIndex: U256::from(2),
            },
        ]
    );
}
