//! PostgreSQL implementation of [`UserRepository`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;

use crate::domain::entities::{NewUser, ProfileUpdate, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Database row for the `users` table.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    age: Option<i32>,
    mobile: Option<String>,
    sex: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            email: row.email,
            password_hash: row.password_hash,
            age: row.age,
            mobile: row.mobile,
            sex: row.sex,
            created_at: row.created_at,
        }
    }
}

/// User repository backed by a PostgreSQL connection pool.
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    /// Inserts a new account. Duplicate username or email surfaces as
    /// [`AppError::Conflict`] via the table's unique constraints.
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError> {
        let row: UserRow = sqlx::query_as(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, password_hash, age, mobile, sex, created_at
            "#,
        )
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, username, email, password_hash, age, mobile, sex, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn update_profile(&self, email: &str, update: ProfileUpdate) -> Result<User, AppError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            UPDATE users
            SET username = $2, age = $3, mobile = $4, sex = $5
            WHERE email = $1
            RETURNING id, username, email, password_hash, age, mobile, sex, created_at
            "#,
        )
        .bind(email)
        .bind(&update.username)
        .bind(update.age)
        .bind(&update.mobile)
        .bind(&update.sex)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Into::into)
            .ok_or_else(|| AppError::not_found("User not found", json!({})))
    }

    async fn update_password_hash(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE users SET password_hash = $2 WHERE email = $1")
            .bind(email)
            .bind(password_hash)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("User not found", json!({})));
        }

        Ok(())
    }
}
