//! List Items Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    errors::ApiError,
    extensions::*,
    items::{into_api_error, models::ItemResponse},
    state::State,
};

/// List Items Handler
///
/// Returns every item across all carts.
#[endpoint(
    tags("items"),
    summary = "List Items",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Items listed"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let items = state.app.items.list_items().await.map_err(into_api_error)?;

    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use cart_app::domain::items::{ItemsServiceError, MockItemsService};

    use crate::test_helpers::{items_service, make_item};

    use super::*;

    fn make_service(items: MockItemsService) -> Service {
        items_service(items, Router::with_path("items").get(handler))
    }

    #[tokio::test]
    async fn test_list_items_returns_200() -> TestResult {
        let mut items = MockItemsService::new();

        items
            .expect_list_items()
            .once()
            .return_once(|| Ok(vec![make_item(1, 1, 4, 2), make_item(2, 3, 4, 1)]));

        let mut res = TestClient::get("http://example.com/items")
            .send(&make_service(items))
            .await;

        let body: Vec<ItemResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body.iter().map(|item| item.cart_id).collect::<Vec<_>>(),
            vec![1, 3]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_list_items_storage_failure_returns_500() -> TestResult {
        let mut items = MockItemsService::new();

        items
            .expect_list_items()
            .once()
            .return_once(|| Err(ItemsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::get("http://example.com/items")
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
