//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::products::{
        errors::ProductsServiceError,
        models::{NewProduct, Product, ProductId},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductId) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let found = self
            .repository
            .get_product(&mut tx, product)
            .await?
            .ok_or(ProductsServiceError::NotFound(product))?;

        tx.commit().await?;

        Ok(found)
    }

    async fn find_by_description(
        &self,
        description: &str,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self
            .repository
            .find_by_description(&mut tx, description)
            .await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        let description = product.description.trim();

        if description.is_empty() {
            return Err(ProductsServiceError::InvalidDescription);
        }

        let mut tx = self.db.begin().await?;

        let existing = self
            .repository
            .find_by_description(&mut tx, description)
            .await?;

        if !existing.is_empty() {
            debug!(description, "rejected duplicate product description");

            return Err(ProductsServiceError::AlreadyExists(description.to_string()));
        }

        let created = self
            .repository
            .create_product(&mut tx, description)
            .await
            .map_err(ProductsServiceError::on_create(description))?;

        tx.commit().await?;

        Ok(created)
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .repository
            .delete_product(&mut tx, product)
            .await
            .map_err(ProductsServiceError::on_delete(product))?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound(product));
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<Product, ProductsServiceError>;

    /// Retrieve every product whose description matches exactly.
    async fn find_by_description(
        &self,
        description: &str,
    ) -> Result<Vec<Product>, ProductsServiceError>;

    /// Creates a new product, rejecting descriptions that are already taken.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Deletes a product with the given id.
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn create_product_assigns_id_and_keeps_description() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx.seed_product("Pencil").await?;

        assert!(product.id.into_i64() > 0, "store should assign an id");
        assert_eq!(product.description, "Pencil");

        Ok(())
    }

    #[tokio::test]
    async fn create_product_duplicate_description_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.seed_product("Pencil").await?;

        let result = ctx.seed_product("Pencil").await;

        assert!(
            matches!(result, Err(ProductsServiceError::AlreadyExists(ref d)) if d == "Pencil"),
            "expected AlreadyExists, got {result:?}"
        );

        if let Err(error) = result {
            assert_eq!(error.to_string(), "Ya existe un producto \"Pencil\".");
        }

        Ok(())
    }

    #[tokio::test]
    async fn create_product_blank_description_returns_invalid() {
        let ctx = TestContext::new().await;

        let result = ctx.seed_product("   ").await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidDescription)),
            "expected InvalidDescription, got {result:?}"
        );
    }

    #[tokio::test]
    async fn find_by_description_returns_exactly_the_created_product() -> TestResult {
        let ctx = TestContext::new().await;

        let pencil = ctx.seed_product("Pencil").await?;
        ctx.seed_product("Pencil 2B").await?;

        let found = ctx.products.find_by_description("Pencil").await?;

        assert_eq!(found, vec![pencil]);

        Ok(())
    }

    #[tokio::test]
    async fn find_by_description_unknown_returns_empty_list() -> TestResult {
        let ctx = TestContext::new().await;

        let found = ctx.products.find_by_description("Eraser").await?;

        assert!(found.is_empty(), "no product should match");

        Ok(())
    }

    #[tokio::test]
    async fn get_product_returns_created_product() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx.seed_product("Notebook").await?;

        let product = ctx.products.get_product(created.id).await?;

        assert_eq!(product, created);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.get_product(ProductId::from_i64(404)).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound(id)) if id.into_i64() == 404),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_products_returns_created_products() -> TestResult {
        let ctx = TestContext::new().await;

        let a = ctx.seed_product("Pencil").await?;
        let b = ctx.seed_product("Eraser").await?;

        let products = ctx.products.list_products().await?;

        assert!(products.contains(&a), "product A should be in the list");
        assert!(products.contains(&b), "product B should be in the list");

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_makes_it_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx.seed_product("Ruler").await?;

        ctx.products.delete_product(product.id).await?;

        let result = ctx.products.get_product(product.id).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound(_))),
            "expected NotFound after deletion, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.delete_product(ProductId::from_i64(9)).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound(_))),
            "expected NotFound, got {result:?}"
        );
    }
}
