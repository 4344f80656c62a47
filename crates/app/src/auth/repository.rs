use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlTimestamp;
use sqlx::{FromRow, PgPool, Row, postgres::PgRow};

use crate::auth::{ApiTokenRecord, ApiTokenUuid};

const INSERT_TOKEN_SQL: &str = include_str!("sql/insert_token.sql");
const LIST_TOKENS_SQL: &str = include_str!("sql/list_tokens.sql");
const REVOKE_TOKEN_SQL: &str = include_str!("sql/revoke_token.sql");
const ACTIVE_TOKEN_DIGEST_SQL: &str = include_str!("sql/active_token_digest.sql");
const MARK_TOKEN_USED_SQL: &str = include_str!("sql/mark_token_used.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn insert(
        &self,
        uuid: ApiTokenUuid,
        digest: &str,
        expires_at: Option<Timestamp>,
    ) -> Result<ApiTokenRecord, sqlx::Error> {
        sqlx::query_as(INSERT_TOKEN_SQL)
            .bind(uuid.into_uuid())
            .bind(digest)
            .bind(expires_at.map(SqlTimestamp::from))
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn list(&self) -> Result<Vec<ApiTokenRecord>, sqlx::Error> {
        sqlx::query_as(LIST_TOKENS_SQL).fetch_all(&self.pool).await
    }

    /// Returns whether a not yet revoked token was found.
    pub(crate) async fn revoke(&self, uuid: ApiTokenUuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(REVOKE_TOKEN_SQL)
            .bind(uuid.into_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Digest of the token, if it is neither revoked nor expired.
    pub(crate) async fn active_digest(
        &self,
        uuid: ApiTokenUuid,
    ) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar(ACTIVE_TOKEN_DIGEST_SQL)
            .bind(uuid.into_uuid())
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn mark_used(&self, uuid: ApiTokenUuid) -> Result<(), sqlx::Error> {
        sqlx::query(MARK_TOKEN_USED_SQL)
            .bind(uuid.into_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn optional_timestamp(row: &PgRow, column: &str) -> sqlx::Result<Option<Timestamp>> {
    Ok(row
        .try_get::<Option<SqlTimestamp>, _>(column)?
        .map(SqlTimestamp::to_jiff))
}

impl FromRow<'_, PgRow> for ApiTokenRecord {
    fn from_row(row: &PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ApiTokenUuid::from_uuid(row.try_get("uuid")?),
            created_at: row.try_get::<SqlTimestamp, _>("created_at")?.to_jiff(),
            last_used_at: optional_timestamp(row, "last_used_at")?,
            expires_at: optional_timestamp(row, "expires_at")?,
            revoked_at: optional_timestamp(row, "revoked_at")?,
        })
    }
}
