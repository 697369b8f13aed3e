mod item;
mod order;

pub use item::{ConsiderationItem, ItemType, OfferItem, consideration_value};
pub use order::{AdvancedOrder, Order, OrderParameters, OrderType};
