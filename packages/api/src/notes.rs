//! # Note manager
//!
//! Emergency notes are short `title` + `description` records owned by one
//! user. Every operation that names a note by its `sno` goes through
//! [`get`], which enforces [`Note::is_owned_by`]: a missing note is
//! [`NoteError::NotFound`], somebody else's note is [`NoteError::Forbidden`].
//! Update and delete also repeat the owner in their `WHERE` clause, so a row
//! that changes hands between the check and the write is left alone.

use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::Note;
use crate::validation::FieldErrors;

#[derive(Debug, Error)]
pub enum NoteError {
    #[error("note {0} not found")]
    NotFound(i64),

    #[error("note {0} belongs to another user")]
    Forbidden(i64),

    #[error("{0}")]
    Invalid(FieldErrors),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Trim both fields and require them to be non-blank.
pub fn validate(title: &str, description: &str) -> Result<(String, String), FieldErrors> {
    let title = title.trim();
    let description = description.trim();

    let mut errors = FieldErrors::new();
    errors.required("title", "Title", title);
    errors.required("desc", "Description", description);
    errors.into_result()?;

    Ok((title.to_string(), description.to_string()))
}

pub async fn create(
    pool: &SqlitePool,
    owner: i64,
    title: &str,
    description: &str,
) -> Result<Note, NoteError> {
    let (title, description) = validate(title, description).map_err(NoteError::Invalid)?;

    let note: Note = sqlx::query_as(
        "INSERT INTO notes (title, description, user_id) VALUES (?, ?, ?) RETURNING *",
    )
    .bind(&title)
    .bind(&description)
    .bind(owner)
    .fetch_one(pool)
    .await?;

    info!(sno = note.sno, user_id = owner, "created note");
    Ok(note)
}

/// All notes of `owner`, oldest first.
pub async fn list(pool: &SqlitePool, owner: i64) -> Result<Vec<Note>, NoteError> {
    let notes = sqlx::query_as("SELECT * FROM notes WHERE user_id = ? ORDER BY sno")
        .bind(owner)
        .fetch_all(pool)
        .await?;
    Ok(notes)
}

/// Fetch a note on behalf of `requester`.
pub async fn get(pool: &SqlitePool, requester: i64, sno: i64) -> Result<Note, NoteError> {
    let note: Option<Note> = sqlx::query_as("SELECT * FROM notes WHERE sno = ?")
        .bind(sno)
        .fetch_optional(pool)
        .await?;

    let Some(note) = note else {
        return Err(NoteError::NotFound(sno));
    };
    if !note.is_owned_by(requester) {
        warn!(sno, requester, owner = note.user_id, "refused access to note");
        return Err(NoteError::Forbidden(sno));
    }
    Ok(note)
}

pub async fn update(
    pool: &SqlitePool,
    requester: i64,
    sno: i64,
    title: &str,
    description: &str,
) -> Result<Note, NoteError> {
    get(pool, requester, sno).await?;
    let (title, description) = validate(title, description).map_err(NoteError::Invalid)?;

    let note: Option<Note> = sqlx::query_as(
        "UPDATE notes SET title = ?, description = ?, updated_at = CURRENT_TIMESTAMP
         WHERE sno = ? AND user_id = ? RETURNING *",
    )
    .bind(&title)
    .bind(&description)
    .bind(sno)
    .bind(requester)
    .fetch_optional(pool)
    .await?;

    let note = note.ok_or(NoteError::NotFound(sno))?;
    info!(sno, user_id = requester, "updated note");
    Ok(note)
}

pub async fn delete(pool: &SqlitePool, requester: i64, sno: i64) -> Result<(), NoteError> {
    get(pool, requester, sno).await?;

    let result = sqlx::query("DELETE FROM notes WHERE sno = ? AND user_id = ?")
        .bind(sno)
        .bind(requester)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(NoteError::NotFound(sno));
    }
    info!(sno, user_id = requester, "deleted note");
    Ok(())
}
