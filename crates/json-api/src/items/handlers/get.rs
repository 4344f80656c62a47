//! Get Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use cart_app::domain::items::models::ItemId;

use crate::{
    errors::ApiError,
    extensions::*,
    items::{into_api_error, models::ItemResponse},
    state::State,
};

/// Get Item Handler
#[endpoint(
    tags("items"),
    summary = "Get Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item found"),
    ),
)]
pub(crate) async fn handler(
    item: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ItemResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = state
        .app
        .items
        .get_item(ItemId::from_i64(item.into_inner()))
        .await
        .map_err(into_api_error)?;

    Ok(Json(item.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use cart_app::domain::items::{ItemsServiceError, MockItemsService};

    use crate::{
        errors::ErrorResponse,
        test_helpers::{items_service, make_item},
    };

    use super::*;

    fn make_service(items: MockItemsService) -> Service {
        items_service(items, Router::with_path("items/{item:num}").get(handler))
    }

    #[tokio::test]
    async fn test_get_item_returns_item_with_product() -> TestResult {
        let mut items = MockItemsService::new();

        items
            .expect_get_item()
            .once()
            .withf(|id| *id == ItemId::from_i64(8))
            .return_once(|_| Ok(make_item(8, 2, 5, 3)));

        let mut res = TestClient::get("http://example.com/items/8")
            .send(&make_service(items))
            .await;

        let body: ItemResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, 8);
        assert_eq!(body.cart_id, 2);
        assert_eq!(body.product.id, 5);
        assert_eq!(body.quantity, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_item_returns_404() -> TestResult {
        let mut items = MockItemsService::new();

        items
            .expect_get_item()
            .once()
            .return_once(|id| Err(ItemsServiceError::NotFound(id)));

        let mut res = TestClient::get("http://example.com/items/8")
            .send(&make_service(items))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "No se encontró un elemento con ID 8");

        Ok(())
    }
}
