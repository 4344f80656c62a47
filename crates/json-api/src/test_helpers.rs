//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use cart_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            models::{Cart, CartId},
        },
        items::{
            MockItemsService,
            models::{Item, ItemId},
        },
        products::{
            MockProductsService,
            models::{Product, ProductId},
        },
    },
};

use crate::state::State;

pub(crate) const TEST_USER_ID: i32 = 7;

pub(crate) fn make_product(id: i64, description: &str) -> Product {
    Product {
        id: ProductId::from_i64(id),
        description: description.to_string(),
    }
}

pub(crate) fn make_item(id: i64, cart: i64, product: i64, quantity: i32) -> Item {
    Item {
        id: ItemId::from_i64(id),
        quantity,
        cart_id: CartId::from_i64(cart),
        product: make_product(product, &format!("Product {product}")),
    }
}

pub(crate) fn make_cart(id: i64, items: Vec<Item>) -> Cart {
    Cart {
        id: CartId::from_i64(id),
        description: "Weekly".to_string(),
        user_id: TEST_USER_ID,
        items: items.into_iter().map(|item| (item.id, item)).collect(),
    }
}

/// Mocks without expectations panic on any call.
struct Mocks {
    carts: MockCartsService,
    items: MockItemsService,
    products: MockProductsService,
    auth: MockAuthService,
}

impl Default for Mocks {
    fn default() -> Self {
        Self {
            carts: MockCartsService::new(),
            items: MockItemsService::new(),
            products: MockProductsService::new(),
            auth: MockAuthService::new(),
        }
    }
}

impl Mocks {
    fn into_state(self) -> Arc<State> {
        State::shared(AppContext {
            carts: Arc::new(self.carts),
            items: Arc::new(self.items),
            products: Arc::new(self.products),
            auth: Arc::new(self.auth),
        })
    }
}

fn service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    Mocks {
        auth,
        ..Mocks::default()
    }
    .into_state()
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    let state = Mocks {
        carts,
        ..Mocks::default()
    }
    .into_state();

    service(state, route)
}

pub(crate) fn items_service(items: MockItemsService, route: Router) -> Service {
    let state = Mocks {
        items,
        ..Mocks::default()
    }
    .into_state();

    service(state, route)
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    let state = Mocks {
        products,
        ..Mocks::default()
    }
    .into_state();

    service(state, route)
}
