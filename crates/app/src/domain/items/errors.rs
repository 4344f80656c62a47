//! Items service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind as DbErrorKind},
};
use thiserror::Error;

use crate::{
    domain::{carts::models::CartId, items::models::ItemId, products::models::ProductId},
    errors::ErrorKind,
};

#[derive(Debug, Error)]
pub enum ItemsServiceError {
    #[error("No se encontró un elemento con ID {0}")]
    NotFound(ItemId),

    #[error("Ya existe un elemento con ID N°{0}")]
    AlreadyExists(ItemId),

    #[error("La cantidad ingresada es inválida.")]
    InvalidQuantity,

    #[error("No se encontró el carrito N° {0}")]
    CartNotFound(CartId),

    #[error("No se encontró el producto N°{0}")]
    ProductNotFound(ProductId),

    #[error("El carrito N° {cart} ya contiene el producto N°{product}.")]
    ProductAlreadyInCart { cart: CartId, product: ProductId },

    #[error("El elemento ya existe.")]
    Duplicate,

    #[error("No se encontró un recurso relacionado.")]
    InvalidReference,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl ItemsServiceError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) | Self::CartNotFound(_) | Self::ProductNotFound(_) => {
                ErrorKind::NotFound
            }
            Self::AlreadyExists(_)
            | Self::InvalidQuantity
            | Self::ProductAlreadyInCart { .. }
            | Self::Duplicate
            | Self::InvalidReference => ErrorKind::BadRequest,
            Self::Sql(_) => ErrorKind::Internal,
        }
    }
}

impl From<Error> for ItemsServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(DbErrorKind::UniqueViolation) => Self::Duplicate,
            Some(DbErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(DbErrorKind::CheckViolation) => Self::InvalidQuantity,
            Some(DbErrorKind::NotNullViolation | DbErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
