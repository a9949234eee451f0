//! Account registration and credential checks against the `users` table.

use sqlx::SqlitePool;
use store::Credits;
use tracing::{info, warn};

use super::forms::{LoginForm, SignupForm};
use super::password::{hash_password, verify_password};
use super::AuthError;
use crate::models::User;
use crate::validation::FieldErrors;

const EMAIL_TAKEN: &str = "An account with this email already exists";
const USERNAME_TAKEN: &str = "This username is already taken";

/// Create a new account with `starting_balance` credits.
///
/// Duplicate email or username is reported as a field error, including when
/// a concurrent signup wins the race to the unique index.
pub async fn register(
    pool: &SqlitePool,
    form: &SignupForm,
    starting_balance: Credits,
) -> Result<User, AuthError> {
    form.validate().map_err(AuthError::Invalid)?;

    let email = form.normalized_email();
    let username = form.normalized_username();

    let mut errors = FieldErrors::new();
    if User::email_taken(pool, &email).await? {
        errors.push("email", EMAIL_TAKEN);
    }
    if User::username_taken(pool, &username).await? {
        errors.push("username", USERNAME_TAKEN);
    }
    errors.into_result().map_err(AuthError::Invalid)?;

    let password_hash = hash_password(&form.password)?;

    let user: User = sqlx::query_as(
        "INSERT INTO users (email, username, password_hash, balance) VALUES (?, ?, ?, ?) RETURNING *",
    )
    .bind(&email)
    .bind(&username)
    .bind(&password_hash)
    .bind(starting_balance)
    .fetch_one(pool)
    .await
    .map_err(duplicate_to_field_error)?;

    info!(user_id = user.id, username = %user.username, "registered new account");
    Ok(user)
}

/// Look up the account for a login form and check its password.
pub async fn authenticate(pool: &SqlitePool, form: &LoginForm) -> Result<User, AuthError> {
    form.validate().map_err(AuthError::Invalid)?;

    let email = form.normalized_email();
    let Some(user) = User::find_by_email(pool, &email).await? else {
        warn!(%email, "login for unknown email");
        return Err(AuthError::InvalidCredentials);
    };

    if !verify_password(&form.password, &user.password_hash)? {
        warn!(user_id = user.id, "login with wrong password");
        return Err(AuthError::InvalidCredentials);
    }

    Ok(user)
}

fn duplicate_to_field_error(err: sqlx::Error) -> AuthError {
    // SQLite reports the column: "UNIQUE constraint failed: users.email"
    let field = err
        .as_database_error()
        .filter(|db_err| db_err.is_unique_violation())
        .map(|db_err| db_err.message().contains("users.username"));

    let mut errors = FieldErrors::new();
    match field {
        Some(true) => errors.push("username", USERNAME_TAKEN),
        Some(false) => errors.push("email", EMAIL_TAKEN),
        None => return AuthError::Database(err),
    }
    AuthError::Invalid(errors)
}
