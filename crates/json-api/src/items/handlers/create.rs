//! Create Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    items::{
        into_api_error,
        models::{CreateItemRequest, ItemResponse},
    },
    state::State,
};

/// Create Item Handler
///
/// Creates an item directly inside an existing cart.
#[endpoint(
    tags("items"),
    summary = "Create Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Item created"),
    ),
)]
#[tracing::instrument(
    name = "items.create",
    skip(json, depot, res),
    fields(item_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ItemResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = state
        .app
        .items
        .create_item(json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    tracing::Span::current().record("item_id", item.id.into_i64());

    res.created_at(&format!("/items/{}", item.id))?;

    Ok(Json(item.into()))
}
