//! App Router

use salvo::Router;

use crate::{auth, carts, items, products};

/// Resource routes, all behind bearer authentication.
///
/// Numeric segments are constrained so `/products/{id}` and
/// `/products/{description}` can share a prefix.
pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(carts_router())
        .push(items_router())
        .push(products_router())
}

fn carts_router() -> Router {
    Router::with_path("carts")
        .get(carts::index::handler)
        .post(carts::create::handler)
        .push(
            Router::with_path("by-userid/{user}")
                .get(carts::by_user::get_handler)
                .delete(carts::by_user::delete_handler),
        )
        .push(
            Router::with_path("{cart:num}")
                .get(carts::get::handler)
                .delete(carts::delete::handler)
                .push(
                    Router::with_path("items")
                        .get(carts::items::index::handler)
                        .post(carts::items::create::handler)
                        .push(Router::with_path("{item:num}").delete(carts::items::delete::handler)),
                )
                .push(
                    Router::with_path("product/{product:num}/quantity/{quantity}")
                        .post(carts::items::quantity::handler),
                ),
        )
}

fn items_router() -> Router {
    Router::with_path("items")
        .get(items::index::handler)
        .post(items::create::handler)
        .push(
            Router::with_path("{item:num}")
                .get(items::get::handler)
                .put(items::update::handler)
                .delete(items::delete::handler),
        )
        .push(
            Router::with_path("cart/{cart:num}/product/{product:num}/quantity/{quantity}")
                .post(items::add_to_cart::handler),
        )
}

fn products_router() -> Router {
    Router::with_path("products")
        .get(products::index::handler)
        .push(
            Router::with_path("{product:num}")
                .get(products::get::handler)
                .delete(products::delete::handler),
        )
        .push(
            Router::with_path("{description}")
                .get(products::search::handler)
                .post(products::create::handler),
        )
}
