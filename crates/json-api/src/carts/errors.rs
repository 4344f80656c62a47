//! Errors

use tracing::{error, warn};

use cart_app::domain::carts::CartsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: CartsServiceError) -> ApiError {
    match &error {
        CartsServiceError::Sql(source) => error!("carts storage failure: {source}"),
        CartsServiceError::UsersServiceUnavailable => {
            warn!("could not verify cart owner against the users service");
        }
        _ => {}
    }

    ApiError::from_kind(error.kind(), error.to_string())
}
