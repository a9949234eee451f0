//! Emergency notes: the owner's list plus the form to add one.

use api::{FieldErrors, Note, UserInfo};
use axum::response::Html;
use dioxus::prelude::*;
use ui::{FieldMessages, Layout};

use super::render;

#[component]
pub fn Emergency(
    user: UserInfo,
    notes: Vec<Note>,
    title: String,
    desc: String,
    errors: FieldErrors,
) -> Element {
    rsx! {
        Layout {
            title: "Emergency",
            user: Some(user),

            h1 { "Emergency notes" }

            form {
                method: "post",
                action: "/emergency",

                div {
                    class: "field",
                    label { r#for: "note", "Title" }
                    input { id: "note", name: "note", r#type: "text", value: "{title}", required: true }
                    FieldMessages { messages: errors.for_field("title") }
                }

                div {
                    class: "field",
                    label { r#for: "desc", "Description" }
                    textarea { id: "desc", name: "desc", required: true, "{desc}" }
                    FieldMessages { messages: errors.for_field("desc") }
                }

                button { r#type: "submit", "Add note" }
            }

            if notes.is_empty() {
                p { class: "empty", "No notes yet." }
            } else {
                table {
                    thead {
                        tr {
                            th { "#" }
                            th { "Title" }
                            th { "Description" }
                            th { "" }
                        }
                    }
                    tbody {
                        for note in notes {
                            tr {
                                key: "{note.sno}",
                                td { "{note.sno}" }
                                td { "{note.title}" }
                                td { "{note.description}" }
                                td {
                                    a { href: "/emergency/update/{note.sno}", "Edit" }
                                    " "
                                    a { href: "/emergency/delete/{note.sno}", "Delete" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn emergency_page(
    user: UserInfo,
    notes: Vec<Note>,
    title: &str,
    desc: &str,
    errors: FieldErrors,
) -> Html<String> {
    let title = title.to_string();
    let desc = desc.to_string();
    render(rsx! {
        Emergency { user: user, notes: notes, title: title, desc: desc, errors: errors }
    })
}
