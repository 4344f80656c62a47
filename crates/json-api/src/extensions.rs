//! Conveniences on salvo's `Depot` and `Response`.

use std::any::Any;

use salvo::{
    http::{StatusCode, header::LOCATION},
    prelude::{Depot, Response},
};
use tracing::error;

use cart_app::auth::ApiTokenUuid;

use crate::errors::ApiError;

const API_TOKEN_KEY: &str = "api_token_uuid";
const INVALID_QUANTITY_MESSAGE: &str = "La cantidad ingresada es inválida.";

pub(crate) trait DepotExt {
    /// Injected values are wiring, so a missing one is a 500.
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;

    fn insert_api_token(&mut self, token: ApiTokenUuid);

    /// Token the auth hoop accepted for this request.
    fn api_token(&self) -> Option<ApiTokenUuid>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>().map_err(|_missing| {
            error!(
                missing = std::any::type_name::<T>(),
                "depot value not injected"
            );

            ApiError::internal()
        })
    }

    fn insert_api_token(&mut self, token: ApiTokenUuid) {
        self.insert(API_TOKEN_KEY, token);
    }

    fn api_token(&self) -> Option<ApiTokenUuid> {
        self.get::<ApiTokenUuid>(API_TOKEN_KEY).ok().copied()
    }
}

pub(crate) trait CreatedExt {
    /// `201 Created` pointing at the new resource.
    fn created_at(&mut self, location: &str) -> Result<(), ApiError>;
}

impl CreatedExt for Response {
    fn created_at(&mut self, location: &str) -> Result<(), ApiError> {
        self.add_header(LOCATION, location, true).map_err(|source| {
            error!(%source, location, "invalid Location header");

            ApiError::internal()
        })?;

        self.status_code(StatusCode::CREATED);

        Ok(())
    }
}

/// A `{quantity}` path segment that is not an `i32` is a 400, like a
/// non-positive one.
pub(crate) fn quantity_param(raw: &str) -> Result<i32, ApiError> {
    raw.parse()
        .map_err(|_invalid| ApiError::new(StatusCode::BAD_REQUEST, INVALID_QUANTITY_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_at_sets_status_and_location() -> Result<(), ApiError> {
        let mut res = Response::new();

        res.created_at("/carts/3")?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(
            res.headers().get(LOCATION).and_then(|value| value.to_str().ok()),
            Some("/carts/3")
        );

        Ok(())
    }

    #[test]
    fn quantity_param_accepts_signed_integers() -> Result<(), ApiError> {
        assert_eq!(quantity_param("7")?, 7);
        assert_eq!(quantity_param("-1")?, -1);

        Ok(())
    }

    #[test]
    fn quantity_param_rejects_non_numbers_as_bad_request() {
        for raw in ["abc", "1.5", "", "99999999999"] {
            let error = quantity_param(raw).err();

            assert_eq!(
                error.map(|error| error.status()),
                Some(StatusCode::BAD_REQUEST),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn missing_depot_value_is_internal_error() {
        let depot = Depot::new();

        assert!(depot.obtain_or_500::<String>().is_err());
        assert!(depot.api_token().is_none());
    }
}
