//! Set Cart Product Quantity Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use cart_app::domain::{carts::models::CartId, products::models::ProductId};

use crate::{
    carts::{into_api_error, models::CartResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Set Cart Product Quantity Handler
///
/// Replaces the quantity held for a product, adding the product when the
/// cart does not reference it yet.
#[endpoint(
    tags("carts"),
    summary = "Set Product Quantity in Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart updated"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.quantity",
    skip(cart, product, quantity, depot),
    fields(
        cart_id = tracing::field::Empty,
        product_id = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<i64>,
    product: PathParam<i64>,
    quantity: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = CartId::from_i64(cart.into_inner());
    let product = ProductId::from_i64(product.into_inner());
    let quantity = quantity_param(&quantity.into_inner())?;

    let span = tracing::Span::current();

    span.record("cart_id", cart.into_i64());
    span.record("product_id", product.into_i64());
    span.record("quantity", quantity);

    let cart = state
        .app
        .carts
        .add_item_to_cart(cart, product, quantity)
        .await
        .map_err(into_api_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use cart_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::test_helpers::{carts_service, make_cart, make_item};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(
            carts,
            Router::with_path("carts/{cart:num}/product/{product:num}/quantity/{quantity}")
                .post(handler),
        )
    }

    #[tokio::test]
    async fn test_quantity_is_replaced() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item_to_cart()
            .once()
            .withf(|cart, product, quantity| {
                *cart == CartId::from_i64(1) && *product == ProductId::from_i64(2) && *quantity == 7
            })
            .return_once(|_, _, _| Ok(make_cart(1, vec![make_item(10, 1, 2, 7)])));

        let mut res = TestClient::post("http://example.com/carts/1/product/2/quantity/7")
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.items.first().map(|item| item.quantity), Some(7));

        Ok(())
    }

    #[tokio::test]
    async fn test_zero_quantity_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item_to_cart()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::InvalidQuantity));

        let mut res = TestClient::post("http://example.com/carts/1/product/2/quantity/0")
            .send(&make_service(carts))
            .await;

        let body: crate::errors::ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "La cantidad ingresada es inválida.");

        Ok(())
    }

    #[tokio::test]
    async fn test_non_numeric_quantity_returns_json_400() -> TestResult {
        let carts = MockCartsService::new();

        let mut res = TestClient::post("http://example.com/carts/1/product/2/quantity/many")
            .send(&make_service(carts))
            .await;

        let body: crate::errors::ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "La cantidad ingresada es inválida.");

        Ok(())
    }
}
