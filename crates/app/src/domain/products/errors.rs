//! Products service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind as DbErrorKind},
};
use thiserror::Error;

use crate::{domain::products::models::ProductId, errors::ErrorKind};

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("No se encontró el producto de ID {0}")]
    NotFound(ProductId),

    #[error("Ya existe un producto \"{0}\".")]
    AlreadyExists(String),

    #[error("El producto N°{0} está asignado a uno o más ítems.")]
    InUse(ProductId),

    #[error("La descripción ingresada es inválida.")]
    InvalidDescription,

    #[error("El producto ya existe.")]
    Duplicate,

    #[error("El producto está incluido en uno o más carritos.")]
    Referenced,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl ProductsServiceError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::AlreadyExists(_)
            | Self::InUse(_)
            | Self::InvalidDescription
            | Self::Duplicate
            | Self::Referenced => ErrorKind::BadRequest,
            Self::Sql(_) => ErrorKind::Internal,
        }
    }

    /// Attach the description to a unique violation raised while inserting.
    pub(crate) fn on_create(description: &str) -> impl FnOnce(Error) -> Self + '_ {
        move |error| match Self::from(error) {
            Self::Duplicate => Self::AlreadyExists(description.to_string()),
            other => other,
        }
    }

    /// Attach the product id to a foreign key violation raised while deleting.
    pub(crate) fn on_delete(product: ProductId) -> impl FnOnce(Error) -> Self {
        move |error| match Self::from(error) {
            Self::Referenced => Self::InUse(product),
            other => other,
        }
    }
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(DbErrorKind::UniqueViolation) => Self::Duplicate,
            Some(DbErrorKind::ForeignKeyViolation) => Self::Referenced,
            Some(DbErrorKind::NotNullViolation | DbErrorKind::CheckViolation) => {
                Self::InvalidDescription
            }
            Some(DbErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_description_message_quotes_the_description() {
        let error = ProductsServiceError::AlreadyExists("Pencil".to_string());

        assert_eq!(error.to_string(), "Ya existe un producto \"Pencil\".");
        assert_eq!(error.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn row_not_found_is_internal_without_context() {
        let error = ProductsServiceError::from(Error::RowNotFound);

        assert!(
            matches!(error, ProductsServiceError::Sql(_)),
            "expected Sql, got {error:?}"
        );
        assert_eq!(error.kind(), ErrorKind::Internal);
    }
}
