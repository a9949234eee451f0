//! Emergency notes: list, create, edit, delete.

use api::notes::{self, NoteError};
use api::FieldErrors;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::extract::CurrentUser;
use crate::views::{emergency_page, note_edit_page};
use crate::{AppError, AppState};

/// Form on the notes page. The title field is called `note`.
#[derive(Debug, Deserialize)]
pub struct NewNoteForm {
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub desc: String,
}

#[derive(Debug, Deserialize)]
pub struct EditNoteForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
}

pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Html<String>, AppError> {
    let notes = notes::list(&state.pool, user.id).await?;
    Ok(emergency_page(user.to_info(), notes, "", "", FieldErrors::new()))
}

pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<NewNoteForm>,
) -> Result<Response, AppError> {
    match notes::create(&state.pool, user.id, &form.note, &form.desc).await {
        Ok(_) => Ok(Redirect::to("/emergency").into_response()),
        Err(NoteError::Invalid(errors)) => {
            let notes = notes::list(&state.pool, user.id).await?;
            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                emergency_page(user.to_info(), notes, &form.note, &form.desc, errors),
            )
                .into_response())
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn edit_page(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(sno): Path<i64>,
) -> Result<Html<String>, AppError> {
    let note = notes::get(&state.pool, user.id, sno).await?;
    Ok(note_edit_page(
        user.to_info(),
        note.sno,
        &note.title,
        &note.description,
        FieldErrors::new(),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(sno): Path<i64>,
    Form(form): Form<EditNoteForm>,
) -> Result<Response, AppError> {
    match notes::update(&state.pool, user.id, sno, &form.title, &form.desc).await {
        Ok(_) => Ok(Redirect::to("/emergency").into_response()),
        Err(NoteError::Invalid(errors)) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            note_edit_page(user.to_info(), sno, &form.title, &form.desc, errors),
        )
            .into_response()),
        Err(e) => Err(e.into()),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(sno): Path<i64>,
) -> Result<Redirect, AppError> {
    notes::delete(&state.pool, user.id, sno).await?;
    Ok(Redirect::to("/emergency"))
}
