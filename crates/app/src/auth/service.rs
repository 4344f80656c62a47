//! Token lifecycle for the CLI and bearer checks for the HTTP API.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::PgPool;
use tracing::debug;

use crate::auth::{
    ApiToken, ApiTokenRecord, ApiTokenUuid, AuthServiceError, IssuedApiToken,
    repository::PgAuthRepository,
};

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a raw bearer value to the token it belongs to.
    async fn authenticate_bearer(&self, bearer: &str) -> Result<ApiTokenUuid, AuthServiceError>;
}

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }

    /// Stores the digest of a new token and hands back its only plaintext copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn issue_api_token(
        &self,
        expires_at: Option<Timestamp>,
    ) -> Result<IssuedApiToken, AuthServiceError> {
        let token = ApiToken::generate();

        let record = self
            .repository
            .insert(token.uuid(), &token.digest(), expires_at)
            .await?;

        Ok(IssuedApiToken {
            token: token.to_string(),
            record,
        })
    }

    /// Every token ever issued, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_api_tokens(&self) -> Result<Vec<ApiTokenRecord>, AuthServiceError> {
        Ok(self.repository.list().await?)
    }

    /// `false` when the token is unknown or already revoked.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub async fn revoke_api_token(&self, uuid: ApiTokenUuid) -> Result<bool, AuthServiceError> {
        Ok(self.repository.revoke(uuid).await?)
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, bearer: &str) -> Result<ApiTokenUuid, AuthServiceError> {
        let token: ApiToken = bearer.parse().map_err(|_malformed| AuthServiceError::Rejected)?;

        let digest = self
            .repository
            .active_digest(token.uuid())
            .await?
            .ok_or(AuthServiceError::Rejected)?;

        if !token.matches(&digest) {
            return Err(AuthServiceError::Rejected);
        }

        if let Err(error) = self.repository.mark_used(token.uuid()).await {
            debug!(%error, token = %token.uuid(), "could not record token use");
        }

        Ok(token.uuid())
    }
}
