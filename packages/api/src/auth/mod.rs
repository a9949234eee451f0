//! Local (email + password) authentication.

mod accounts;
mod forms;
mod password;
mod session;

use thiserror::Error;

use crate::validation::FieldErrors;

pub use accounts::{authenticate, register};
pub use forms::{LoginForm, SignupForm};
pub use password::{hash_password, verify_password};
pub use session::{current_user_id, sign_in, sign_out, SESSION_USER_ID_KEY};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0}")]
    Invalid(FieldErrors),

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("password hashing failed: {0}")]
    Hash(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
