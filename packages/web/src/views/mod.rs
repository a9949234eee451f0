//! Server-rendered pages.
//!
//! Each page is a dioxus component wrapped in [`ui::Layout`] plus a plain
//! function that renders it to a complete document. Handlers call the plain
//! functions only after their last `.await`, so no component tree is ever
//! held across a suspension point.

use axum::response::Html;
use dioxus::prelude::*;

mod about;
pub use about::about_page;

mod credits;
pub use credits::credits_page;

mod emergency;
pub use emergency::emergency_page;

mod error;
pub use error::error_page;

mod essentials;
pub use essentials::{essentials_page, Notice};

mod index;
pub use index::index_page;

mod login;
pub use login::login_page;

mod note_edit;
pub use note_edit::note_edit_page;

mod signup;
pub use signup::signup_page;

fn render(element: Element) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render_element(element)
    ))
}
