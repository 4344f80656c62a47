//! Item Models

use crate::{
    domain::{
        carts::models::CartId,
        products::models::{Product, ProductId},
    },
    ids::TypedId,
};

/// Item Id
pub type ItemId = TypedId<Item>;

/// A quantity of one product held by one cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub quantity: i32,
    pub cart_id: CartId,
    pub product: Product,
}

/// New Item Model
///
/// `id` is optional; when present it must not collide with an existing item.
/// The stored item always receives a generated id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub id: Option<ItemId>,
    pub quantity: i32,
    pub cart_id: CartId,
    pub product_id: ProductId,
}

/// Item Update Model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemUpdate {
    pub quantity: i32,
}

/// Quantities must be strictly positive.
pub(crate) fn is_valid_quantity(quantity: i32) -> bool {
    quantity > 0
}
