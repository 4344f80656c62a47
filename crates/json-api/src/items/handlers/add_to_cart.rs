//! Add Item to Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use cart_app::domain::{carts::models::CartId, products::models::ProductId};

use crate::{
    carts::{self, models::CartResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Add Item to Cart Handler
///
/// Sets the quantity of a product in a cart, adding an item when the cart
/// does not hold that product yet. Returns the updated cart.
#[endpoint(
    tags("items"),
    summary = "Add Item to Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Item stored in cart"),
    ),
)]
#[tracing::instrument(
    name = "items.add_to_cart",
    skip(cart, product, quantity, depot, res),
    fields(
        cart_id = tracing::field::Empty,
        product_id = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<i64>,
    product: PathParam<i64>,
    quantity: PathParam<String>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = CartId::from_i64(cart.into_inner());
    let product = ProductId::from_i64(product.into_inner());
    let quantity = quantity_param(&quantity.into_inner())?;

    let span = tracing::Span::current();

    span.record("cart_id", cart.into_i64());
    span.record("product_id", product.into_i64());

    let cart = state
        .app
        .carts
        .add_item_to_cart(cart, product, quantity)
        .await
        .map_err(carts::into_api_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use cart_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::{
        errors::ErrorResponse,
        test_helpers::{carts_service, make_cart, make_item},
    };

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(
            carts,
            Router::with_path("items/cart/{cart:num}/product/{product:num}/quantity/{quantity}")
                .post(handler),
        )
    }

    #[tokio::test]
    async fn test_add_to_cart_returns_201_with_cart() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item_to_cart()
            .once()
            .withf(|cart, product, quantity| {
                *cart == CartId::from_i64(1) && *product == ProductId::from_i64(2) && *quantity == 3
            })
            .return_once(|_, _, _| Ok(make_cart(1, vec![make_item(10, 1, 2, 3)])));

        let mut res = TestClient::post("http://example.com/items/cart/1/product/2/quantity/3")
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.items.len(), 1, "expected one item, got {body:?}");

        Ok(())
    }

    #[tokio::test]
    async fn test_add_to_cart_unknown_product_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item_to_cart()
            .once()
            .return_once(|_, product, _| Err(CartsServiceError::ProductNotFound(product)));

        let mut res = TestClient::post("http://example.com/items/cart/1/product/77/quantity/3")
            .send(&make_service(carts))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "No se encontró el producto N°77");

        Ok(())
    }

    #[tokio::test]
    async fn test_add_to_cart_negative_quantity_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item_to_cart()
            .once()
            .withf(|_, _, quantity| *quantity == -2)
            .return_once(|_, _, _| Err(CartsServiceError::InvalidQuantity));

        let res = TestClient::post("http://example.com/items/cart/1/product/2/quantity/-2")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_to_cart_non_numeric_quantity_returns_json_400() -> TestResult {
        let carts = MockCartsService::new();

        let mut res = TestClient::post("http://example.com/items/cart/1/product/2/quantity/abc")
            .send(&make_service(carts))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.status, 400);
        assert_eq!(body.message, "La cantidad ingresada es inválida.");

        Ok(())
    }
}
