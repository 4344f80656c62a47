//! Test context for service-level integration tests.

use std::sync::Arc;

use crate::{
    auth::PgAuthService,
    database::Db,
    domain::{
        carts::{
            CartsService, CartsServiceError, PgCartsService,
            models::{Cart, NewCart},
        },
        items::PgItemsService,
        products::{
            PgProductsService, ProductsService, ProductsServiceError,
            models::{NewProduct, Product},
        },
    },
    users::{MockUsersClient, models::UserResponse},
};

use super::db::TestDb;

pub(crate) struct TestContext {
    pub db: TestDb,
    pub products: PgProductsService,
    pub items: PgItemsService,
    pub carts: PgCartsService,
    pub auth: PgAuthService,
}

impl TestContext {
    /// Services over a fresh database, with a Users service that knows every user id.
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            products: PgProductsService::new(db.clone()),
            items: PgItemsService::new(db.clone()),
            carts: PgCartsService::new(db, Arc::new(users_accepting_everyone())),
            auth: PgAuthService::new(test_db.pool().clone()),
            db: test_db,
        }
    }

    /// A carts service over the same database, backed by the given Users client.
    pub fn carts_with_users(&self, users: MockUsersClient) -> PgCartsService {
        PgCartsService::new(Db::new(self.db.pool().clone()), Arc::new(users))
    }

    pub async fn seed_cart(
        &self,
        description: &str,
        user_id: i32,
    ) -> Result<Cart, CartsServiceError> {
        let cart = NewCart {
            description: description.to_string(),
            user_id,
        };

        self.carts.create_cart(cart).await
    }

    pub async fn seed_product(
        &self,
        description: &str,
    ) -> Result<Product, ProductsServiceError> {
        let product = NewProduct {
            description: description.to_string(),
        };

        self.products.create_product(product).await
    }
}

fn users_accepting_everyone() -> MockUsersClient {
    let mut users = MockUsersClient::new();

    users.expect_get_user_by_user_id().returning(|id| {
        Some(UserResponse {
            id,
            name: Some(format!("User {id}")),
            last_name: None,
        })
    });

    users
}
