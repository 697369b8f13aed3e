#[allow(clippy::too_many_arguments)]
pub mod seaport {
    //! Seaport 1.1 types and the batch fulfillment entry point.
    //!
    //! Enum-typed fields (`ItemType`, `OrderType`, `Side`) are declared as `uint8`,
    //! which is how the contract ABI encodes them. Typed wrappers live in
    //! [`crate::types`].

    alloy::sol!(
        #[derive(Debug, PartialEq, Eq)]
        struct OfferItem {
            uint8 itemType;
            address token;
            uint256 identifierOrCriteria;
            uint256 startAmount;
            uint256 endAmount;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct ConsiderationItem {
            uint8 itemType;
            address token;
            uint256 identifierOrCriteria;
            uint256 startAmount;
            uint256 endAmount;
            address recipient;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct OrderParameters {
            address offerer;
            address zone;
            OfferItem[] offer;
            ConsiderationItem[] consideration;
            uint8 orderType;
            uint256 startTime;
            uint256 endTime;
            bytes32 zoneHash;
            uint256 salt;
            bytes32 conduitKey;
            uint256 totalOriginalConsiderationItems;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct Order {
            OrderParameters parameters;
            bytes signature;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct AdvancedOrder {
            OrderParameters parameters;
            uint120 numerator;
            uint120 denominator;
            bytes signature;
            bytes extraData;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct CriteriaResolver {
            uint256 orderIndex;
            uint8 side;
            uint256 index;
            uint256 identifier;
            bytes32[] criteriaProof;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct FulfillmentComponent {
            uint256 orderIndex;
            uint256 itemIndex;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct ReceivedItem {
            uint8 itemType;
            address token;
            uint256 identifier;
            uint256 amount;
            address recipient;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct Execution {
            ReceivedItem item;
            address offerer;
            bytes32 conduitKey;
        }

        #[derive(Debug, PartialEq, Eq)]
        interface Seaport {
            function fulfillAvailableAdvancedOrders(
                AdvancedOrder[] advancedOrders,
                CriteriaResolver[] criteriaResolvers,
                FulfillmentComponent[][] offerFulfillments,
                FulfillmentComponent[][] considerationFulfillments,
                bytes32 fulfillerConduitKey,
                address recipient,
                uint256 maximumFulfilled
            ) external payable returns (bool[] availableOrders, Execution[] executions);
        }
    );
}
