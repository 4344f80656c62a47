//! List Carts Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::{into_api_error, models::CartResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// List Carts Handler
///
/// Returns every cart with its items.
#[endpoint(
    tags("carts"),
    summary = "List Carts",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Carts listed"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CartResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let carts = state.app.carts.list_carts().await.map_err(into_api_error)?;

    Ok(Json(carts.into_iter().map(Into::into).collect()))
}
