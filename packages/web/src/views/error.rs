use axum::response::Html;
use dioxus::prelude::*;
use ui::Layout;

use super::render;

#[component]
pub fn ErrorPage(status: u16, message: String) -> Element {
    rsx! {
        Layout {
            title: "Error",
            user: None,

            h1 { "{status}" }
            p { "{message}" }
            a { href: "/", "Back to the home page" }
        }
    }
}

pub fn error_page(status: u16, message: &str) -> Html<String> {
    let message = message.to_string();
    render(rsx! { ErrorPage { status: status, message: message } })
}
