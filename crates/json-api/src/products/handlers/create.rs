//! Create Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use cart_app::domain::products::models::NewProduct;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{into_api_error, models::ProductResponse},
    state::State,
};

/// Create Product Handler
///
/// Registers a product under the given description.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
    ),
)]
#[tracing::instrument(
    name = "products.create",
    skip(description, depot, res),
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    description: PathParam<String>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .create_product(NewProduct {
            description: description.into_inner(),
        })
        .await
        .map_err(into_api_error)?;

    tracing::Span::current().record("product_id", product.id.into_i64());

    res.created_at(&format!("/products/{}", product.id))?;

    Ok(Json(product.into()))
}
