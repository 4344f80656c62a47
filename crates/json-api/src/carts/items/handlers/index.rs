//! List Cart Items Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use cart_app::domain::carts::models::CartId;

use crate::{
    carts::into_api_error, errors::ApiError, extensions::*, items::models::ItemResponse,
    state::State,
};

/// List Cart Items Handler
///
/// Returns the items of a cart ordered by id.
#[endpoint(
    tags("carts"),
    summary = "List Cart Items",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart items listed"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let items = state
        .app
        .carts
        .get_cart_items(CartId::from_i64(cart.into_inner()))
        .await
        .map_err(into_api_error)?;

    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use cart_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::test_helpers::{carts_service, make_item};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("carts/{cart:num}/items").get(handler))
    }

    #[tokio::test]
    async fn test_list_cart_items_returns_200() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart_items()
            .once()
            .withf(|id| *id == CartId::from_i64(2))
            .return_once(|_| Ok(vec![make_item(1, 2, 3, 4)]));

        let mut res = TestClient::get("http://example.com/carts/2/items")
            .send(&make_service(carts))
            .await;

        let body: Vec<ItemResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.first().map(|item| item.quantity), Some(4));

        Ok(())
    }

    #[tokio::test]
    async fn test_list_items_of_missing_cart_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart_items()
            .once()
            .return_once(|id| Err(CartsServiceError::NotFound(id)));

        let res = TestClient::get("http://example.com/carts/2/items")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
