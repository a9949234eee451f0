use axum::{extract::State, response::Html};

use crate::extract::{CurrentUser, MaybeUser};
use crate::views;
use crate::{AppError, AppState};

pub async fn index(MaybeUser(user): MaybeUser) -> Html<String> {
    views::index_page(user.map(|u| u.to_info()))
}

pub async fn about(MaybeUser(user): MaybeUser) -> Html<String> {
    views::about_page(user.map(|u| u.to_info()))
}

pub async fn essentials(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
) -> Html<String> {
    views::essentials_page(
        user.map(|u| u.to_info()),
        state.catalog.products().to_vec(),
        None,
    )
}

pub async fn credits(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Html<String>, AppError> {
    let history = api::purchase::history(&state.pool, user.id).await?;
    Ok(views::credits_page(user.to_info(), history))
}

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
