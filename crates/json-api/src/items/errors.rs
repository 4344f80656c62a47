//! Errors

use tracing::error;

use cart_app::domain::items::ItemsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: ItemsServiceError) -> ApiError {
    if let ItemsServiceError::Sql(source) = &error {
        error!("items storage failure: {source}");
    }

    ApiError::from_kind(error.kind(), error.to_string())
}
