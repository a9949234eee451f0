//! Login page view with email/password form.

use api::FieldErrors;
use axum::response::Html;
use dioxus::prelude::*;
use ui::{Alert, AlertKind, FieldMessages, Layout};

use super::render;

/// Login page component.
#[component]
pub fn Login(email: String, errors: FieldErrors, #[props(!optional)] alert: Option<String>) -> Element {
    rsx! {
        Layout {
            title: "Log in",
            user: None,

            h1 { "Log in" }

            {alert.map(|message| rsx! { Alert { kind: AlertKind::Error, message: message } })}

            form {
                method: "post",
                action: "/login",

                div {
                    class: "field",
                    label { r#for: "email", "Email" }
                    input { id: "email", name: "email", r#type: "email", value: "{email}", required: true }
                    FieldMessages { messages: errors.for_field("email") }
                }

                div {
                    class: "field",
                    label { r#for: "password", "Password" }
                    input { id: "password", name: "password", r#type: "password", required: true }
                    FieldMessages { messages: errors.for_field("password") }
                }

                div {
                    class: "field",
                    label {
                        input { r#type: "checkbox", name: "remember" }
                        " Remember me"
                    }
                }

                button { r#type: "submit", "Log in" }
            }

            p {
                "No account yet? "
                a { href: "/signup", "Sign up" }
            }
        }
    }
}

pub fn login_page(email: &str, errors: FieldErrors, alert: Option<String>) -> Html<String> {
    let email = email.to_string();
    render(rsx! { Login { email: email, errors: errors, alert: alert } })
}
