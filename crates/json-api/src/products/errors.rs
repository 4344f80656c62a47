//! Errors

use tracing::error;

use cart_app::domain::products::ProductsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    if let ProductsServiceError::Sql(source) = &error {
        error!("products storage failure: {source}");
    }

    ApiError::from_kind(error.kind(), error.to_string())
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use cart_app::domain::products::models::ProductId;

    use super::*;

    #[test]
    fn duplicate_description_is_a_bad_request() {
        let error = into_api_error(ProductsServiceError::AlreadyExists("Pencil".to_string()));

        assert_eq!(
            error,
            ApiError::new(StatusCode::BAD_REQUEST, "Ya existe un producto \"Pencil\".")
        );
    }

    #[test]
    fn missing_product_is_not_found() {
        let error = into_api_error(ProductsServiceError::NotFound(ProductId::from_i64(4)));

        assert_eq!(error.status(), StatusCode::NOT_FOUND);
    }
}
