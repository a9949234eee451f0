use api::auth::{self, AuthError, LoginForm, SignupForm};
use api::FieldErrors;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use time::Duration;
use tower_sessions::Session;
use tracing::info;

use crate::extract::CurrentUser;
use crate::views::{login_page, signup_page};
use crate::{AppError, AppState};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub async fn login_form() -> Html<String> {
    login_page("", FieldErrors::new(), None)
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let user = match auth::authenticate(&state.pool, &form).await {
        Ok(user) => user,
        Err(AuthError::Invalid(errors)) => {
            return Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                login_page(&form.email, errors, None),
            )
                .into_response());
        }
        Err(AuthError::InvalidCredentials) => {
            return Ok((
                StatusCode::UNAUTHORIZED,
                login_page(
                    &form.email,
                    FieldErrors::new(),
                    Some(INVALID_CREDENTIALS.to_string()),
                ),
            )
                .into_response());
        }
        Err(e) => return Err(e.into()),
    };

    let remember_for = form
        .remember()
        .then(|| Duration::days(state.settings.session.remember_days));
    auth::sign_in(&session, user.id, remember_for).await?;

    info!(user_id = user.id, remember = form.remember(), "user logged in");
    Ok(Redirect::to("/").into_response())
}

pub async fn signup_form(State(state): State<AppState>) -> Html<String> {
    signup_page(
        "",
        "",
        state.settings.account.starting_balance,
        FieldErrors::new(),
    )
}

pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SignupForm>,
) -> Result<Response, AppError> {
    let starting_balance = state.settings.account.starting_balance;
    let user = match auth::register(&state.pool, &form, starting_balance).await {
        Ok(user) => user,
        Err(AuthError::Invalid(errors)) => {
            return Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                signup_page(&form.email, &form.username, starting_balance, errors),
            )
                .into_response());
        }
        Err(e) => return Err(e.into()),
    };

    auth::sign_in(&session, user.id, None).await?;
    Ok(Redirect::to("/").into_response())
}

pub async fn logout(
    session: Session,
    CurrentUser(user): CurrentUser,
) -> Result<Redirect, AppError> {
    auth::sign_out(&session).await?;
    info!(user_id = user.id, "user logged out");
    Ok(Redirect::to("/"))
}
