//! Update Item Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use cart_app::domain::items::models::ItemId;

use crate::{
    errors::ApiError,
    extensions::*,
    items::{
        into_api_error,
        models::{ItemResponse, UpdateItemRequest},
    },
    state::State,
};

/// Update Item Handler
///
/// Replaces the quantity of an item.
#[endpoint(
    tags("items"),
    summary = "Update Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item updated"),
    ),
)]
#[tracing::instrument(
    name = "items.update",
    skip(item, json, depot),
    fields(item_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    item: PathParam<i64>,
    json: JsonBody<UpdateItemRequest>,
    depot: &mut Depot,
) -> Result<Json<ItemResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let item = ItemId::from_i64(item.into_inner());

    tracing::Span::current().record("item_id", item.into_i64());

    let item = state
        .app
        .items
        .update_item(item, json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(item.into()))
}
