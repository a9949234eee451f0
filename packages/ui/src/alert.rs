use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Success => "alert alert-success",
            AlertKind::Error => "alert alert-error",
        }
    }
}

/// Banner shown above page content.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> Element {
    rsx! {
        div { class: kind.class(), role: "alert", "{message}" }
    }
}

/// Messages attached to a single form field.
#[component]
pub fn FieldMessages(messages: Vec<String>) -> Element {
    rsx! {
        for message in messages {
            p { class: "field-error", "{message}" }
        }
    }
}
