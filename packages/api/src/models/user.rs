//! # User model for registered accounts
//!
//! Defines the two representations of a user:
//!
//! ## [`User`]
//!
//! The complete row from the `users` table, loaded with [`sqlx::FromRow`]:
//!
//! - `id` — integer primary key.
//! - `email`, `username` — both unique; the email is stored lower-cased.
//! - `password_hash` — Argon2id PHC string.
//! - `balance` — current NouCredits, never negative.
//! - `created_at` — set by the database at signup.
//!
//! ## [`UserInfo`]
//!
//! The subset the pages are allowed to see. It omits the password hash and is
//! what the navigation bar and the credits page are rendered from.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use store::Credits;

/// Full user record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub balance: Credits,
    pub created_at: NaiveDateTime,
}

impl User {
    /// Convert to UserInfo for rendering.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            email: self.email.clone(),
            username: self.username.clone(),
            balance: self.balance,
        }
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    pub async fn email_taken(pool: &SqlitePool, email: &str) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }

    pub async fn username_taken(pool: &SqlitePool, username: &str) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }
}

/// User information safe to render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub balance: Credits,
}
