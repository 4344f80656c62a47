//! Add Cart Items Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use cart_app::domain::carts::models::CartId;

use crate::{
    carts::{
        into_api_error,
        models::{CartItemRequest, CartResponse},
    },
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Add Cart Items Handler
///
/// Applies a batch of product quantities to a cart. Either every entry is
/// stored or none is.
#[endpoint(
    tags("carts"),
    summary = "Add Items to Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Items stored in cart"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.create",
    skip(cart, json, depot),
    fields(
        cart_id = tracing::field::Empty,
        item_count = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<i64>,
    json: JsonBody<Vec<CartItemRequest>>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = CartId::from_i64(cart.into_inner());
    let items: Vec<_> = json.into_inner().into_iter().map(Into::into).collect();

    let span = tracing::Span::current();

    span.record("cart_id", cart.into_i64());
    span.record("item_count", items.len());

    let cart = state
        .app
        .carts
        .add_items_to_cart(cart, items)
        .await
        .map_err(into_api_error)?;

    Ok(Json(cart.into()))
}
