use api::UserInfo;
use axum::response::Html;
use dioxus::prelude::*;
use ui::Layout;

use super::render;

#[component]
pub fn Index(#[props(!optional)] user: Option<UserInfo>) -> Element {
    let greeting = match &user {
        Some(user) => format!("Welcome back, {}.", user.username),
        None => "Welcome.".to_string(),
    };

    rsx! {
        Layout {
            title: "Home",
            user: user,

            h1 { "Emergency Supplies" }
            p { "{greeting}" }
            p {
                "Stock up on essentials with your NouCredits, and keep a list of "
                "emergency contacts and requests where you can find them."
            }
            ul {
                li { a { href: "/essentials", "Browse essentials" } }
                li { a { href: "/emergency", "Emergency notes" } }
                li { a { href: "/credits", "Your credits" } }
            }
        }
    }
}

pub fn index_page(user: Option<UserInfo>) -> Html<String> {
    render(rsx! { Index { user: user } })
}
