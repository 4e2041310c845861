//! User model and database operations.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE users (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     email TEXT NOT NULL UNIQUE,
//!     password TEXT NOT NULL
//! );
//! ```
//!
//! The `password` column holds an Argon2id PHC string, never plaintext.
//! Accounts are created by registration and read during authentication;
//! they are never updated or deleted from within the application.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// A registered account.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Row id, generated on insert.
    pub id: i64,

    /// Login identifier. Unique across all users, matched case-sensitively.
    pub email: String,

    /// Argon2id PHC hash of the password.
    #[sqlx(rename = "password")]
    #[serde(rename = "password")]
    pub password_hash: String,
}

/// Input for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,

    /// Argon2id PHC hash (not the plaintext password).
    pub password_hash: String,
}

impl User {
    /// Inserts a new user and returns the stored row.
    ///
    /// # Errors
    ///
    /// Fails with a database error if the email is already registered
    /// (unique constraint) or the connection is broken. The store facade
    /// converts the constraint case into a [`RegisterOutcome`].
    ///
    /// [`RegisterOutcome`]: crate::store::RegisterOutcome
    pub async fn create(pool: &SqlitePool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password)
            VALUES (?, ?)
            RETURNING id, email, password
            "#,
        )
        .bind(data.email)
        .bind(data.password_hash)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by email address (exact, case-sensitive match).
    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }
}
