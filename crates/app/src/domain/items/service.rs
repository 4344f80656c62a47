//! Items service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        carts::repository::PgCartsRepository,
        items::{
            errors::ItemsServiceError,
            models::{Item, ItemId, ItemUpdate, NewItem, is_valid_quantity},
            repository::PgItemsRepository,
        },
        products::repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgItemsService {
    db: Db,
    repository: PgItemsRepository,
    carts_repository: PgCartsRepository,
    products_repository: PgProductsRepository,
}

impl PgItemsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgItemsRepository::new(),
            carts_repository: PgCartsRepository::new(),
            products_repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ItemsService for PgItemsService {
    async fn list_items(&self) -> Result<Vec<Item>, ItemsServiceError> {
        let mut tx = self.db.begin().await?;

        let items = self.repository.list_items(&mut tx).await?;

        tx.commit().await?;

        Ok(items)
    }

    async fn get_item(&self, item: ItemId) -> Result<Item, ItemsServiceError> {
        let mut tx = self.db.begin().await?;

        let found = self
            .repository
            .get_item(&mut tx, item)
            .await?
            .ok_or(ItemsServiceError::NotFound(item))?;

        tx.commit().await?;

        Ok(found)
    }

    async fn create_item(&self, item: NewItem) -> Result<Item, ItemsServiceError> {
        if !is_valid_quantity(item.quantity) {
            return Err(ItemsServiceError::InvalidQuantity);
        }

        let mut tx = self.db.begin().await?;

        if let Some(id) = item.id
            && self.repository.item_exists(&mut tx, id).await?
        {
            return Err(ItemsServiceError::AlreadyExists(id));
        }

        if !self
            .carts_repository
            .cart_exists(&mut tx, item.cart_id)
            .await?
        {
            return Err(ItemsServiceError::CartNotFound(item.cart_id));
        }

        if !self
            .products_repository
            .product_exists(&mut tx, item.product_id)
            .await?
        {
            return Err(ItemsServiceError::ProductNotFound(item.product_id));
        }

        if self
            .repository
            .cart_holds_product(&mut tx, item.cart_id, item.product_id)
            .await?
        {
            return Err(ItemsServiceError::ProductAlreadyInCart {
                cart: item.cart_id,
                product: item.product_id,
            });
        }

        let created = self.repository.create_item(&mut tx, &item).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_item(
        &self,
        item: ItemId,
        update: ItemUpdate,
    ) -> Result<Item, ItemsServiceError> {
        if !is_valid_quantity(update.quantity) {
            return Err(ItemsServiceError::InvalidQuantity);
        }

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_quantity(&mut tx, item, update.quantity)
            .await?
            .ok_or(ItemsServiceError::NotFound(item))?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_item(&self, item: ItemId) -> Result<(), ItemsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_item(&mut tx, item).await?;

        if rows_affected == 0 {
            return Err(ItemsServiceError::NotFound(item));
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ItemsService: Send + Sync {
    /// Retrieves every item across all carts.
    async fn list_items(&self) -> Result<Vec<Item>, ItemsServiceError>;

    /// Retrieve a single item.
    async fn get_item(&self, item: ItemId) -> Result<Item, ItemsServiceError>;

    /// Creates an item directly inside an existing cart.
    async fn create_item(&self, item: NewItem) -> Result<Item, ItemsServiceError>;

    /// Replaces the quantity of an item, keeping its identity.
    async fn update_item(&self, item: ItemId, update: ItemUpdate)
    -> Result<Item, ItemsServiceError>;

    /// Deletes an item with the given id.
    async fn delete_item(&self, item: ItemId) -> Result<(), ItemsServiceError>;
}
