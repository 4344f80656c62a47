//! Delete Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use cart_app::domain::carts::models::CartId;

use crate::{carts::into_api_error, errors::ApiError, extensions::*, state::State};

/// Delete Cart Handler
///
/// Deletes a cart together with its items.
#[endpoint(
    tags("carts"),
    summary = "Delete Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart deleted"),
    ),
)]
#[tracing::instrument(
    name = "carts.delete",
    skip(cart, depot),
    fields(
        api_token = tracing::field::Empty,
        cart_id = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(cart: PathParam<i64>, depot: &mut Depot) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = CartId::from_i64(cart.into_inner());

    let span = tracing::Span::current();

    if let Some(token) = depot.api_token() {
        span.record("api_token", tracing::field::display(token));
    }

    span.record("cart_id", cart.into_i64());

    state
        .app
        .carts
        .delete_cart(cart)
        .await
        .map_err(into_api_error)?;

    tracing::info!(cart_id = %cart, "deleted cart");

    Ok(StatusCode::OK)
}
