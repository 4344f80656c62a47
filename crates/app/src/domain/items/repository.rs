//! Items Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::{
    carts::models::CartId,
    items::models::{Item, ItemId, NewItem},
    products::models::{Product, ProductId},
};

const LIST_ITEMS_SQL: &str = include_str!("sql/list_items.sql");
const GET_ITEM_SQL: &str = include_str!("sql/get_item.sql");
const LIST_ITEMS_FOR_CARTS_SQL: &str = include_str!("sql/list_items_for_carts.sql");
const CREATE_ITEM_SQL: &str = include_str!("sql/create_item.sql");
const UPDATE_ITEM_QUANTITY_SQL: &str = include_str!("sql/update_item_quantity.sql");
const DELETE_ITEM_SQL: &str = include_str!("sql/delete_item.sql");
const ITEM_EXISTS_SQL: &str = include_str!("sql/item_exists.sql");
const CART_HOLDS_PRODUCT_SQL: &str = include_str!("sql/cart_holds_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgItemsRepository;

impl PgItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Item>, sqlx::Error> {
        query_as::<Postgres, Item>(LIST_ITEMS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: ItemId,
    ) -> Result<Option<Item>, sqlx::Error> {
        query_as::<Postgres, Item>(GET_ITEM_SQL)
            .bind(item.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn list_items_for_carts(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        carts: &[CartId],
    ) -> Result<Vec<Item>, sqlx::Error> {
        let cart_ids: Vec<i64> = carts.iter().map(|cart| cart.into_i64()).collect();

        query_as::<Postgres, Item>(LIST_ITEMS_FOR_CARTS_SQL)
            .bind(cart_ids)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: &NewItem,
    ) -> Result<Item, sqlx::Error> {
        query_as::<Postgres, Item>(CREATE_ITEM_SQL)
            .bind(item.quantity)
            .bind(item.cart_id.into_i64())
            .bind(item.product_id.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: ItemId,
        quantity: i32,
    ) -> Result<Option<Item>, sqlx::Error> {
        query_as::<Postgres, Item>(UPDATE_ITEM_QUANTITY_SQL)
            .bind(item.into_i64())
            .bind(quantity)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn delete_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: ItemId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ITEM_SQL)
            .bind(item.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn item_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: ItemId,
    ) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, bool>(ITEM_EXISTS_SQL)
            .bind(item.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn cart_holds_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartId,
        product: ProductId,
    ) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, bool>(CART_HOLDS_PRODUCT_SQL)
            .bind(cart.into_i64())
            .bind(product.into_i64())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Item {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ItemId::from_i64(row.try_get("id")?),
            quantity: row.try_get("quantity")?,
            cart_id: CartId::from_i64(row.try_get("cart_id")?),
            product: Product {
                id: ProductId::from_i64(row.try_get("product_id")?),
                description: row.try_get("product_description")?,
            },
        })
    }
}
