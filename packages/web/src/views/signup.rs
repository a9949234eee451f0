//! Registration page view.

use api::FieldErrors;
use axum::response::Html;
use dioxus::prelude::*;
use store::{format_credits, Credits};
use ui::{FieldMessages, Layout};

use super::render;

#[component]
pub fn Signup(email: String, username: String, starting_balance: Credits, errors: FieldErrors) -> Element {
    let starting_balance = format_credits(starting_balance);

    rsx! {
        Layout {
            title: "Sign up",
            user: None,

            h1 { "Create an account" }
            p { "New accounts start with {starting_balance} to spend on emergency supplies." }

            form {
                method: "post",
                action: "/signup",

                div {
                    class: "field",
                    label { r#for: "email", "Email" }
                    input { id: "email", name: "email", r#type: "email", value: "{email}", required: true }
                    FieldMessages { messages: errors.for_field("email") }
                }

                div {
                    class: "field",
                    label { r#for: "username", "Username" }
                    input { id: "username", name: "username", r#type: "text", value: "{username}", required: true }
                    FieldMessages { messages: errors.for_field("username") }
                }

                div {
                    class: "field",
                    label { r#for: "password", "Password" }
                    input { id: "password", name: "password", r#type: "password", required: true }
                    FieldMessages { messages: errors.for_field("password") }
                }

                button { r#type: "submit", "Sign up" }
            }

            p {
                "Already registered? "
                a { href: "/login", "Log in" }
            }
        }
    }
}

pub fn signup_page(
    email: &str,
    username: &str,
    starting_balance: Credits,
    errors: FieldErrors,
) -> Html<String> {
    let email = email.to_string();
    let username = username.to_string();
    render(rsx! {
        Signup {
            email: email,
            username: username,
            starting_balance: starting_balance,
            errors: errors,
        }
    })
}
