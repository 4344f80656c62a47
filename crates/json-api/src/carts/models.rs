//! Cart Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use cart_app::domain::{
    carts::models::{Cart, CartItemInput, NewCart},
    items::models::ItemId,
    products::models::ProductId,
};

use crate::items::models::ItemResponse;

/// Cart Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartResponse {
    /// Cart id
    pub id: i64,

    /// Free text label
    pub description: String,

    /// Owning user in the users service
    pub user_id: i32,

    /// Items ordered by id
    pub items: Vec<ItemResponse>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        let items = cart.sorted_items().into_iter().map(Into::into).collect();

        Self {
            id: cart.id.into_i64(),
            description: cart.description,
            user_id: cart.user_id,
            items,
        }
    }
}

/// Create Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateCartRequest {
    pub description: String,
    pub user_id: i32,
}

impl From<CreateCartRequest> for NewCart {
    fn from(request: CreateCartRequest) -> Self {
        NewCart {
            description: request.description,
            user_id: request.user_id,
        }
    }
}

/// One entry of a batch add. Entries must not carry an `id`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartItemRequest {
    #[serde(default)]
    pub id: Option<i64>,

    pub product_id: i64,

    pub quantity: i32,
}

impl From<CartItemRequest> for CartItemInput {
    fn from(request: CartItemRequest) -> Self {
        CartItemInput {
            id: request.id.map(ItemId::from_i64),
            product_id: ProductId::from_i64(request.product_id),
            quantity: request.quantity,
        }
    }
}
