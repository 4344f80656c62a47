//! Cart Models

use rustc_hash::FxHashMap;

use crate::{
    domain::{
        items::models::{Item, ItemId},
        products::models::ProductId,
    },
    ids::TypedId,
};

/// Cart Id
pub type CartId = TypedId<Cart>;

/// Cart Model
///
/// Items are keyed by id and carry no order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    pub id: CartId,
    pub description: String,
    pub user_id: i32,
    pub items: FxHashMap<ItemId, Item>,
}

impl Cart {
    /// Find the item in this cart that references the given product.
    #[must_use]
    pub fn item_for_product(&self, product: ProductId) -> Option<&Item> {
        self.items.values().find(|item| item.product.id == product)
    }

    /// Items ordered by id, for stable presentation.
    #[must_use]
    pub fn sorted_items(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.values().collect();

        items.sort_by_key(|item| item.id);

        items
    }

    pub(crate) fn extend_items(&mut self, items: impl IntoIterator<Item = Item>) {
        self.items
            .extend(items.into_iter().map(|item| (item.id, item)));
    }
}

/// New Cart Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCart {
    pub description: String,
    pub user_id: i32,
}

/// One entry of a batch addition to a cart.
///
/// `id` must be empty: batch entries always describe new items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartItemInput {
    pub id: Option<ItemId>,
    pub product_id: ProductId,
    pub quantity: i32,
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashMap;

    use crate::domain::products::models::Product;

    use super::*;

    fn item(id: i64, product: i64, quantity: i32) -> Item {
        Item {
            id: ItemId::from_i64(id),
            quantity,
            cart_id: CartId::from_i64(1),
            product: Product {
                id: ProductId::from_i64(product),
                description: format!("Product {product}"),
            },
        }
    }

    fn cart(items: Vec<Item>) -> Cart {
        let mut cart = Cart {
            id: CartId::from_i64(1),
            description: "Weekly".to_string(),
            user_id: 7,
            items: FxHashMap::default(),
        };

        cart.extend_items(items);

        cart
    }

    #[test]
    fn item_for_product_matches_on_product_id() {
        let cart = cart(vec![item(10, 1, 3), item(11, 2, 5)]);

        let found = cart.item_for_product(ProductId::from_i64(2));

        assert_eq!(found.map(|item| item.id), Some(ItemId::from_i64(11)));
        assert!(cart.item_for_product(ProductId::from_i64(9)).is_none());
    }

    #[test]
    fn sorted_items_orders_by_item_id() {
        let cart = cart(vec![item(30, 3, 1), item(10, 1, 1), item(20, 2, 1)]);

        let ids: Vec<i64> = cart
            .sorted_items()
            .into_iter()
            .map(|item| item.id.into_i64())
            .collect();

        assert_eq!(ids, vec![10, 20, 30]);
    }
}
