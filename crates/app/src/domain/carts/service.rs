//! Carts service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use sqlx::{Postgres, Transaction};

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{Cart, CartId, CartItemInput, NewCart},
            repository::PgCartsRepository,
        },
        items::{
            models::{Item, ItemId, NewItem, is_valid_quantity},
            repository::PgItemsRepository,
        },
        products::{models::ProductId, repository::PgProductsRepository},
    },
    users::UsersClient,
};

#[derive(Clone)]
pub struct PgCartsService {
    db: Db,
    repository: PgCartsRepository,
    items_repository: PgItemsRepository,
    products_repository: PgProductsRepository,
    users: Arc<dyn UsersClient>,
}

impl fmt::Debug for PgCartsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgCartsService")
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db, users: Arc<dyn UsersClient>) -> Self {
        Self {
            db,
            repository: PgCartsRepository::new(),
            items_repository: PgItemsRepository::new(),
            products_repository: PgProductsRepository::new(),
            users,
        }
    }

    async fn verify_user(&self, user_id: i32) -> Result<(), CartsServiceError> {
        match self.users.get_user_by_user_id(user_id).await {
            None => Err(CartsServiceError::UserNotFound(user_id)),
            Some(user) if user.is_fallback() => Err(CartsServiceError::UsersServiceUnavailable),
            Some(_) => Ok(()),
        }
    }

    async fn load_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: &mut Cart,
    ) -> Result<(), CartsServiceError> {
        let items = self
            .items_repository
            .list_items_for_carts(tx, &[cart.id])
            .await?;

        cart.extend_items(items);

        Ok(())
    }

    /// Lock the cart row for the rest of the transaction and load its items.
    async fn lock_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartId,
    ) -> Result<Cart, CartsServiceError> {
        let mut locked = self
            .repository
            .lock_cart(tx, cart)
            .await?
            .ok_or(CartsServiceError::NotFound(cart))?;

        self.load_items(tx, &mut locked).await?;

        Ok(locked)
    }

    /// Replace the quantity of the item holding `product`, or add a new item for it.
    async fn reconcile(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: &mut Cart,
        product: ProductId,
        quantity: i32,
    ) -> Result<(), CartsServiceError> {
        if let Some(existing) = cart.item_for_product(product).map(|item| item.id) {
            let updated = self
                .items_repository
                .update_quantity(tx, existing, quantity)
                .await?
                .ok_or(CartsServiceError::ItemNotFound(existing))?;

            cart.items.insert(updated.id, updated);

            return Ok(());
        }

        if !self
            .products_repository
            .product_exists(tx, product)
            .await?
        {
            return Err(CartsServiceError::ProductNotFound(product));
        }

        let created = self
            .items_repository
            .create_item(
                tx,
                &NewItem {
                    id: None,
                    quantity,
                    cart_id: cart.id,
                    product_id: product,
                },
            )
            .await?;

        cart.items.insert(created.id, created);

        Ok(())
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn list_carts(&self) -> Result<Vec<Cart>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut carts = self.repository.list_carts(&mut tx).await?;

        let ids: Vec<CartId> = carts.iter().map(|cart| cart.id).collect();

        let items = self
            .items_repository
            .list_items_for_carts(&mut tx, &ids)
            .await?;

        tx.commit().await?;

        let mut by_cart: FxHashMap<CartId, Vec<Item>> = FxHashMap::default();

        for item in items {
            by_cart.entry(item.cart_id).or_default().push(item);
        }

        for cart in &mut carts {
            if let Some(items) = by_cart.remove(&cart.id) {
                cart.extend_items(items);
            }
        }

        Ok(carts)
    }

    async fn get_cart(&self, cart: CartId) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut found = self
            .repository
            .get_cart(&mut tx, cart)
            .await?
            .ok_or(CartsServiceError::NotFound(cart))?;

        self.load_items(&mut tx, &mut found).await?;

        tx.commit().await?;

        Ok(found)
    }

    async fn get_cart_items(&self, cart: CartId) -> Result<Vec<Item>, CartsServiceError> {
        let found = self.get_cart(cart).await?;

        let mut items: Vec<Item> = found.items.into_values().collect();

        items.sort_by_key(|item| item.id);

        Ok(items)
    }

    async fn create_cart(&self, cart: NewCart) -> Result<Cart, CartsServiceError> {
        self.verify_user(cart.user_id).await?;

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_cart(&mut tx, &cart).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn find_by_user_id(&self, user_id: i32) -> Result<Cart, CartsServiceError> {
        self.verify_user(user_id).await?;

        let mut tx = self.db.begin().await?;

        let mut found = self
            .repository
            .find_by_user_id(&mut tx, user_id)
            .await?
            .ok_or(CartsServiceError::NoCartForUser(user_id))?;

        self.load_items(&mut tx, &mut found).await?;

        tx.commit().await?;

        Ok(found)
    }

    async fn add_item_to_cart(
        &self,
        cart: CartId,
        product: ProductId,
        quantity: i32,
    ) -> Result<Cart, CartsServiceError> {
        if !is_valid_quantity(quantity) {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut tx = self.db.begin().await?;

        let mut locked = self.lock_cart(&mut tx, cart).await?;

        self.reconcile(&mut tx, &mut locked, product, quantity)
            .await?;

        tx.commit().await?;

        Ok(locked)
    }

    async fn add_items_to_cart(
        &self,
        cart: CartId,
        items: Vec<CartItemInput>,
    ) -> Result<Cart, CartsServiceError> {
        if items.iter().any(|item| item.id.is_some()) {
            return Err(CartsServiceError::UnexpectedItemId);
        }

        if !items.iter().all(|item| is_valid_quantity(item.quantity)) {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut tx = self.db.begin().await?;

        let mut locked = self.lock_cart(&mut tx, cart).await?;

        for item in items {
            self.reconcile(&mut tx, &mut locked, item.product_id, item.quantity)
                .await?;
        }

        tx.commit().await?;

        Ok(locked)
    }

    async fn delete_item_from_cart(
        &self,
        cart: CartId,
        item: ItemId,
    ) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut locked = self.lock_cart(&mut tx, cart).await?;

        if locked.items.remove(&item).is_none() {
            return Err(CartsServiceError::ItemNotFound(item));
        }

        self.items_repository.delete_item(&mut tx, item).await?;

        tx.commit().await?;

        Ok(locked)
    }

    async fn delete_cart(&self, cart: CartId) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_cart(&mut tx, cart).await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound(cart));
        }

        tx.commit().await?;

        Ok(())
    }

    async fn delete_cart_by_user_id(&self, user_id: i32) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let found = self
            .repository
            .find_by_user_id(&mut tx, user_id)
            .await?
            .ok_or(CartsServiceError::NoCartForUser(user_id))?;

        self.repository.delete_cart(&mut tx, found.id).await?;

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieves every cart with its items.
    async fn list_carts(&self) -> Result<Vec<Cart>, CartsServiceError>;

    /// Retrieve a single cart.
    async fn get_cart(&self, cart: CartId) -> Result<Cart, CartsServiceError>;

    /// Items of a cart, ordered by id.
    async fn get_cart_items(&self, cart: CartId) -> Result<Vec<Item>, CartsServiceError>;

    /// Creates a new, empty cart once the owning user has been confirmed.
    async fn create_cart(&self, cart: NewCart) -> Result<Cart, CartsServiceError>;

    /// Retrieve the cart assigned to a user.
    async fn find_by_user_id(&self, user_id: i32) -> Result<Cart, CartsServiceError>;

    /// Set the quantity of `product` in the cart, adding an item when the
    /// cart does not reference that product yet.
    async fn add_item_to_cart(
        &self,
        cart: CartId,
        product: ProductId,
        quantity: i32,
    ) -> Result<Cart, CartsServiceError>;

    /// Apply [`CartsService::add_item_to_cart`] for every entry, all or nothing.
    async fn add_items_to_cart(
        &self,
        cart: CartId,
        items: Vec<CartItemInput>,
    ) -> Result<Cart, CartsServiceError>;

    /// Remove one item from the cart.
    async fn delete_item_from_cart(
        &self,
        cart: CartId,
        item: ItemId,
    ) -> Result<Cart, CartsServiceError>;

    /// Deletes a cart together with its items.
    async fn delete_cart(&self, cart: CartId) -> Result<(), CartsServiceError>;

    /// Deletes the cart assigned to a user.
    async fn delete_cart_by_user_id(&self, user_id: i32) -> Result<(), CartsServiceError>;
}
