//! Request extractors for the signed-in user.

use api::{auth, User};
use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tower_sessions::Session;

use crate::{AppError, AppState};

/// The signed-in user, if any.
pub struct MaybeUser(pub Option<User>);

/// The signed-in user. Anonymous requests are redirected to `/login`.
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for MaybeUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::Session(msg.to_string()))?;

        let Some(user_id) = auth::current_user_id(&session).await? else {
            return Ok(MaybeUser(None));
        };

        let state = AppState::from_ref(state);
        let user = User::find(&state.pool, user_id).await?;
        if user.is_none() {
            // Account is gone; forget it
            auth::sign_out(&session).await?;
        }
        Ok(MaybeUser(user))
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let MaybeUser(user) = MaybeUser::from_request_parts(parts, state).await?;
        user.map(CurrentUser).ok_or(AppError::Unauthenticated)
    }
}
