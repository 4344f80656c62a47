//! Search Products Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{into_api_error, models::ProductResponse},
    state::State,
};

/// Search Products Handler
///
/// Returns the products whose description matches exactly.
#[endpoint(
    tags("products"),
    summary = "Find Products by Description",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Matching products"),
    ),
)]
pub(crate) async fn handler(
    description: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .find_by_description(&description.into_inner())
        .await
        .map_err(into_api_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
