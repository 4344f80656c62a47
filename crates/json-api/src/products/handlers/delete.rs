//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use cart_app::domain::products::models::ProductId;

use crate::{errors::ApiError, extensions::*, products::into_api_error, state::State};

/// Delete Product Handler
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
    ),
)]
#[tracing::instrument(
    name = "products.delete",
    skip(product, depot),
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    product: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = ProductId::from_i64(product.into_inner());

    tracing::Span::current().record("product_id", product.into_i64());

    state
        .app
        .products
        .delete_product(product)
        .await
        .map_err(into_api_error)?;

    tracing::info!(product_id = %product, "deleted product");

    Ok(StatusCode::OK)
}
