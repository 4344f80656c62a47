use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// Unknown, malformed, revoked or expired. Callers answer 401.
    #[error("bearer token rejected")]
    Rejected,

    #[error("token storage failed")]
    Storage(#[from] sqlx::Error),
}
