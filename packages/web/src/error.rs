use api::auth::AuthError;
use api::notes::NoteError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;
use tracing::error;

use crate::views::error_page;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not signed in")]
    Unauthenticated,

    #[error("Page not found")]
    NotFound,

    #[error("You are not allowed to do that")]
    Forbidden,

    #[error("{0}")]
    Unprocessable(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<tower_sessions::session::Error> for AppError {
    fn from(err: tower_sessions::session::Error) -> Self {
        AppError::Session(err.to_string())
    }
}

impl From<NoteError> for AppError {
    fn from(err: NoteError) -> Self {
        match err {
            NoteError::NotFound(_) => AppError::NotFound,
            NoteError::Forbidden(_) => AppError::Forbidden,
            NoteError::Invalid(errors) => AppError::Unprocessable(errors.to_string()),
            NoteError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Database(e) => AppError::Database(e),
            AuthError::Hash(e) => AppError::Hash(e),
            AuthError::Invalid(errors) => AppError::Unprocessable(errors.to_string()),
            AuthError::InvalidCredentials => AppError::Unauthenticated,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Unauthenticated => return Redirect::to("/login").into_response(),
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Session(_) | AppError::Hash(_) | AppError::Database(_) => {
                error!("{self}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "Something went wrong. Please try again.".to_string()
        } else {
            self.to_string()
        };

        (status, error_page(status.as_u16(), &message)).into_response()
    }
}
