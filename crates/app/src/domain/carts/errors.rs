//! Carts service errors.

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
pub enum CartsServiceError {
    #[error("No se encontró el carrito N° {0}")]
    NotFound(CartId),

    #[error("No existe un carrito asignado a ése usuario.")]
    NoCartForUser(i32),

    #[error("No se encontró el ítem N°{0}")]
    ItemNotFound(ItemId),

    #[error("No se encontró el producto N°{0}")]
    ProductNotFound(ProductId),

    #[error("La cantidad ingresada es inválida.")]
    InvalidQuantity,

    #[error("Uno o más elementos ingresados incluyen un ID de ítem que no corresponde.")]
    UnexpectedItemId,

    #[error("El usuario no existe.")]
    UserNotFound(i32),

    #[error("Error interno. No se pudo verificar que el usuario existe. Intente más tarde.")]
    UsersServiceUnavailable,

    #[error("El carrito fue modificado por otra solicitud. Intente nuevamente.")]
    Conflict,

    #[error("No se encontró un recurso relacionado.")]
    InvalidReference,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl CartsServiceError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_)
            | Self::NoCartForUser(_)
            | Self::ItemNotFound(_)
            | Self::ProductNotFound(_)
            | Self::UserNotFound(_)
            | Self::InvalidReference => ErrorKind::NotFound,
            Self::InvalidQuantity | Self::UnexpectedItemId | Self::Conflict => {
                ErrorKind::BadRequest
            }
            Self::UsersServiceUnavailable => ErrorKind::ServiceUnavailable,
            Self::Sql(_) => ErrorKind::Internal,
        }
    }
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(DbErrorKind::UniqueViolation) => Self::Conflict,
            Some(DbErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(DbErrorKind::CheckViolation) => Self::InvalidQuantity,
            Some(DbErrorKind::NotNullViolation | DbErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
