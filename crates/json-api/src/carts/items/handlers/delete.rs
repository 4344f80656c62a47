//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use cart_app::domain::{carts::models::CartId, items::models::ItemId};

use crate::{
    carts::{into_api_error, models::CartResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Remove Cart Item Handler
///
/// Removes one item from a cart and returns the updated cart.
#[endpoint(
    tags("carts"),
    summary = "Remove Item from Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item removed"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.delete",
    skip(cart, item, depot),
    fields(
        cart_id = tracing::field::Empty,
        item_id = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<i64>,
    item: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = CartId::from_i64(cart.into_inner());
    let item = ItemId::from_i64(item.into_inner());

    let span = tracing::Span::current();

    span.record("cart_id", cart.into_i64());
    span.record("item_id", item.into_i64());

    let cart = state
        .app
        .carts
        .delete_item_from_cart(cart, item)
        .await
        .map_err(into_api_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use cart_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::{
        errors::ErrorResponse,
        test_helpers::{carts_service, make_cart},
    };

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(
            carts,
            Router::with_path("carts/{cart:num}/items/{item:num}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_remove_item_returns_updated_cart() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_delete_item_from_cart()
            .once()
            .withf(|cart, item| *cart == CartId::from_i64(1) && *item == ItemId::from_i64(10))
            .return_once(|_, _| Ok(make_cart(1, Vec::new())));

        let mut res = TestClient::delete("http://example.com/carts/1/items/10")
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.items.is_empty(), "expected an empty cart, got {body:?}");

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_item_not_in_cart_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_delete_item_from_cart()
            .once()
            .return_once(|_, item| Err(CartsServiceError::ItemNotFound(item)));

        let mut res = TestClient::delete("http://example.com/carts/1/items/10")
            .send(&make_service(carts))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "No se encontró el ítem N°10");

        Ok(())
    }
}
