//! PostgreSQL implementation of [`LinkRepository`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Database row for the `links` table.
#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    code: String,
    long_url: String,
    owner_username: String,
    owner_email: String,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for ShortLink {
    fn from(row: LinkRow) -> Self {
        Self {
            id: row.id,
            code: row.code,
            long_url: row.long_url,
            owner_username: row.owner_username,
            owner_email: row.owner_email,
            created_at: row.created_at,
        }
    }
}

/// Link repository backed by a PostgreSQL connection pool.
pub struct PgLinkRepository {
    pool: PgPool,
}

impl PgLinkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    /// Inserts a new link. A code collision surfaces as
    /// [`AppError::Conflict`] via the unique constraint on `code`.
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let row: LinkRow = sqlx::query_as(
            r#"
            INSERT INTO links (code, long_url, owner_username, owner_email)
            VALUES ($1, $2, $3, $4)
            RETURNING id, code, long_url, owner_username, owner_email, created_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.long_url)
        .bind(&new_link.owner_username)
        .bind(&new_link.owner_email)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let row: Option<LinkRow> = sqlx::query_as(
            r#"
            SELECT id, code, long_url, owner_username, owner_email, created_at
            FROM links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list_by_owner(&self, owner_email: &str) -> Result<Vec<ShortLink>, AppError> {
        let rows: Vec<LinkRow> = sqlx::query_as(
            r#"
            SELECT id, code, long_url, owner_username, owner_email, created_at
            FROM links
            WHERE owner_email = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(owner_email)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_by_owner(&self, owner_email: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE owner_email = $1")
            .bind(owner_email)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Deletes by code set, always filtered to the caller's own links.
    /// Codes belonging to other owners simply do not match.
    async fn delete_by_codes(
        &self,
        codes: &[String],
        owner_email: &str,
    ) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE code = ANY($1) AND owner_email = $2")
            .bind(codes)
            .bind(owner_email)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
