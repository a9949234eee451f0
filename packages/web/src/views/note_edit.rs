use api::{FieldErrors, UserInfo};
use axum::response::Html;
use dioxus::prelude::*;
use ui::{FieldMessages, Layout};

use super::render;

#[component]
pub fn NoteEdit(user: UserInfo, sno: i64, title: String, desc: String, errors: FieldErrors) -> Element {
    rsx! {
        Layout {
            title: "Edit note",
            user: Some(user),

            h1 { "Edit note" }

            form {
                method: "post",
                action: "/emergency/update/{sno}",

                div {
                    class: "field",
                    label { r#for: "title", "Title" }
                    input { id: "title", name: "title", r#type: "text", value: "{title}", required: true }
                    FieldMessages { messages: errors.for_field("title") }
                }

                div {
                    class: "field",
                    label { r#for: "desc", "Description" }
                    textarea { id: "desc", name: "desc", required: true, "{desc}" }
                    FieldMessages { messages: errors.for_field("desc") }
                }

                button { r#type: "submit", "Save" }
                " "
                a { href: "/emergency", "Cancel" }
            }
        }
    }
}

pub fn note_edit_page(
    user: UserInfo,
    sno: i64,
    title: &str,
    desc: &str,
    errors: FieldErrors,
) -> Html<String> {
    let title = title.to_string();
    let desc = desc.to_string();
    render(rsx! {
        NoteEdit { user: user, sno: sno, title: title, desc: desc, errors: errors }
    })
}
