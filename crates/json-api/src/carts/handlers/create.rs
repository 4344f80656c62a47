//! Create Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    carts::{
        into_api_error,
        models::{CartResponse, CreateCartRequest},
    },
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Create Cart Handler
///
/// Creates an empty cart once the owning user is confirmed by the users service.
#[endpoint(
    tags("carts"),
    summary = "Create Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Cart created"),
    ),
)]
#[tracing::instrument(
    name = "carts.create",
    skip(json, depot, res),
    fields(
        api_token = tracing::field::Empty,
        cart_id = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCartRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let span = tracing::Span::current();

    if let Some(token) = depot.api_token() {
        span.record("api_token", tracing::field::display(token));
    }

    let cart = state
        .app
        .carts
        .create_cart(json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    span.record("cart_id", cart.id.into_i64());

    res.created_at(&format!("/carts/{}", cart.id))?;

    Ok(Json(cart.into()))
}
