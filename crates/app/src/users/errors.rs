//! Users client errors.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UsersClientError {
    #[error("failed to build users service client")]
    Build(#[source] reqwest::Error),

    #[error("users service request failed")]
    Transport(#[from] reqwest::Error),

    #[error("users service answered with status {0}")]
    Status(StatusCode),
}
