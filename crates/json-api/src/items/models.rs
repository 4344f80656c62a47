//! Item Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use cart_app::domain::{
    carts::models::CartId,
    items::models::{Item, ItemId, ItemUpdate, NewItem},
    products::models::ProductId,
};

use crate::products::models::ProductResponse;

/// Item Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ItemResponse {
    /// Item id
    pub id: i64,

    /// Units of the product held
    pub quantity: i32,

    /// Owning cart id
    pub cart_id: i64,

    /// Referenced product
    pub product: ProductResponse,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.into_i64(),
            quantity: item.quantity,
            cart_id: item.cart_id.into_i64(),
            product: item.product.into(),
        }
    }
}

impl From<&Item> for ItemResponse {
    fn from(item: &Item) -> Self {
        item.clone().into()
    }
}

/// Create Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateItemRequest {
    /// Optional caller-chosen id; must not be taken
    #[serde(default)]
    pub id: Option<i64>,

    pub quantity: i32,

    pub cart_id: i64,

    pub product_id: i64,
}

impl From<CreateItemRequest> for NewItem {
    fn from(request: CreateItemRequest) -> Self {
        NewItem {
            id: request.id.map(ItemId::from_i64),
            quantity: request.quantity,
            cart_id: CartId::from_i64(request.cart_id),
            product_id: ProductId::from_i64(request.product_id),
        }
    }
}

/// Update Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateItemRequest {
    /// New quantity, replacing the current one
    pub quantity: i32,
}

impl From<UpdateItemRequest> for ItemUpdate {
    fn from(request: UpdateItemRequest) -> Self {
        ItemUpdate {
            quantity: request.quantity,
        }
    }
}
