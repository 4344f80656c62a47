//! Delete Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use cart_app::domain::items::models::ItemId;

use crate::{errors::ApiError, extensions::*, items::into_api_error, state::State};

/// Delete Item Handler
#[endpoint(
    tags("items"),
    summary = "Delete Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item deleted"),
    ),
)]
#[tracing::instrument(
    name = "items.delete",
    skip(item, depot),
    fields(item_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(item: PathParam<i64>, depot: &mut Depot) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let item = ItemId::from_i64(item.into_inner());

    tracing::Span::current().record("item_id", item.into_i64());

    state
        .app
        .items
        .delete_item(item)
        .await
        .map_err(into_api_error)?;

    tracing::info!(item_id = %item, "deleted item");

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use cart_app::domain::items::{ItemsServiceError, MockItemsService};

    use crate::test_helpers::items_service;

    use super::*;

    fn make_service(items: MockItemsService) -> Service {
        items_service(items, Router::with_path("items/{item:num}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_item_success() -> TestResult {
        let mut items = MockItemsService::new();

        items
            .expect_delete_item()
            .once()
            .withf(|id| *id == ItemId::from_i64(11))
            .return_once(|_| Ok(()));

        let res = TestClient::delete("http://example.com/items/11")
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_item_returns_404() -> TestResult {
        let mut items = MockItemsService::new();

        items
            .expect_delete_item()
            .once()
            .return_once(|id| Err(ItemsServiceError::NotFound(id)));

        let res = TestClient::delete("http://example.com/items/11")
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_non_numeric_id_is_not_routed() -> TestResult {
        let mut items = MockItemsService::new();

        items.expect_delete_item().never();

        let res = TestClient::delete("http://example.com/items/abc")
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
