//! MySQL implementation of the user directory trait.
//!
//! Backed by a single `users` table keyed by unique phone number (see
//! `migrations/001_create_users.sql`). OTP and rate-limit state are
//! ephemeral and live in the expiring store, not here.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use dp_core::domain::entities::user::User;
use dp_core::errors::DirectoryError;
use dp_core::repositories::UserDirectory;

/// MySQL-backed user directory
pub struct MySqlDirectory {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlDirectory {
    /// Create a new directory over an SQLx MySQL pool
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DirectoryError> {
        let phone: String = row
            .try_get("phone")
            .map_err(|e| DirectoryError::Unavailable(format!("Failed to get phone: {}", e)))?;
        let registered_at: DateTime<Utc> = row
            .try_get("registered_at")
            .map_err(|e| {
                DirectoryError::Unavailable(format!("Failed to get registered_at: {}", e))
            })?;

        Ok(User::registered_at(phone, registered_at))
    }

    fn like_pattern(search: &str) -> String {
        format!("%{}%", search)
    }
}

#[async_trait]
impl UserDirectory for MySqlDirectory {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DirectoryError> {
        let row = sqlx::query("SELECT phone, registered_at FROM users WHERE phone = ? LIMIT 1")
            .bind(phone)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed)?;

        match row {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: User) -> Result<User, DirectoryError> {
        sqlx::query("INSERT INTO users (phone, registered_at) VALUES (?, ?)")
            .bind(&user.phone)
            .bind(user.registered_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match e.as_database_error() {
                Some(db) if db.is_unique_violation() => DirectoryError::AlreadyExists,
                _ => query_failed(e),
            })?;

        Ok(user)
    }

    async fn update_phone(&self, phone: &str, new_phone: &str) -> Result<User, DirectoryError> {
        // The unique key makes the rename atomic: a taken target phone
        // fails the statement, an unknown source phone affects no rows
        let result = sqlx::query("UPDATE users SET phone = ? WHERE phone = ?")
            .bind(new_phone)
            .bind(phone)
            .execute(&self.pool)
            .await
            .map_err(|e| match e.as_database_error() {
                Some(db) if db.is_unique_violation() => DirectoryError::AlreadyExists,
                _ => query_failed(e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DirectoryError::NotFound);
        }

        self.find_by_phone(new_phone)
            .await?
            .ok_or_else(|| DirectoryError::Unavailable("user missing after rename".to_string()))
    }

    async fn delete(&self, phone: &str) -> Result<bool, DirectoryError> {
        let result = sqlx::query("DELETE FROM users WHERE phone = ?")
            .bind(phone)
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(
        &self,
        offset: u32,
        limit: u32,
        search: &str,
    ) -> Result<Vec<User>, DirectoryError> {
        let rows = sqlx::query(
            r#"
            SELECT phone, registered_at
            FROM users
            WHERE phone LIKE ?
            ORDER BY phone ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(Self::like_pattern(search))
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn count(&self, search: &str) -> Result<u64, DirectoryError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM users WHERE phone LIKE ?")
            .bind(Self::like_pattern(search))
            .fetch_one(&self.pool)
            .await
            .map_err(query_failed)?;

        let total: i64 = row
            .try_get("total")
            .map_err(|e| DirectoryError::Unavailable(format!("Failed to get total: {}", e)))?;
        Ok(total as u64)
    }
}

fn query_failed(e: sqlx::Error) -> DirectoryError {
    tracing::error!(error = %e, "Database query failed");
    DirectoryError::Unavailable(format!("Database query failed: {}", e))
}
