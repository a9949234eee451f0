//! HTTP front end: axum routes, session handling and server-rendered pages.

mod app;
mod error;
mod extract;
mod handlers;
mod views;

pub use app::{app, router, AppState};
pub use error::AppError;
