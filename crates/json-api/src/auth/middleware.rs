//! Rejects requests without a valid `Authorization: Bearer` header.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::error;

use cart_app::auth::{ApiTokenUuid, AuthServiceError};

use crate::{errors::ApiError, extensions::*, state::State};

const MISSING_TOKEN_MESSAGE: &str = "Falta el encabezado Authorization o no es válido.";
const INVALID_TOKEN_MESSAGE: &str = "El token de acceso no es válido.";

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let outcome = match bearer_value(req) {
        Some(bearer) => verify(depot, bearer).await,
        None => Err(ApiError::unauthorized(MISSING_TOKEN_MESSAGE)),
    };

    match outcome {
        Ok(token) => {
            depot.insert_api_token(token);
            ctrl.call_next(req, depot, res).await;
        }
        Err(rejection) => {
            rejection.render(res);
            ctrl.skip_rest();
        }
    }
}

async fn verify(depot: &Depot, bearer: &str) -> Result<ApiTokenUuid, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    match state.app.auth.authenticate_bearer(bearer).await {
        Ok(token) => Ok(token),
        Err(AuthServiceError::Rejected) => Err(ApiError::unauthorized(INVALID_TOKEN_MESSAGE)),
        Err(AuthServiceError::Storage(source)) => {
            error!(error = %source, "token lookup failed");
            Err(ApiError::internal())
        }
    }
}

/// The credentials after a case-insensitive `Bearer` scheme, trimmed.
fn bearer_value(req: &Request) -> Option<&str> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, credentials) = header.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    Some(credentials.trim()).filter(|value| !value.is_empty())
}
