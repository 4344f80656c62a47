//! Cart by User Handlers

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    carts::{into_api_error, models::CartResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Find Cart by User Handler
///
/// Returns the cart assigned to a user, after confirming the user exists.
#[endpoint(
    tags("carts"),
    summary = "Find Cart by User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart found"),
    ),
)]
pub(crate) async fn get_handler(
    user: PathParam<i32>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .carts
        .find_by_user_id(user.into_inner())
        .await
        .map_err(into_api_error)?;

    Ok(Json(cart.into()))
}

/// Delete Cart by User Handler
#[endpoint(
    tags("carts"),
    summary = "Delete Cart by User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart deleted"),
    ),
)]
#[tracing::instrument(
    name = "carts.delete_by_user",
    skip(user, depot),
    fields(user_id = tracing::field::Empty),
    err
)]
pub(crate) async fn delete_handler(
    user: PathParam<i32>,
    depot: &mut Depot,
) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = user.into_inner();

    tracing::Span::current().record("user_id", user);

    state
        .app
        .carts
        .delete_cart_by_user_id(user)
        .await
        .map_err(into_api_error)?;

    Ok(StatusCode::OK)
}
