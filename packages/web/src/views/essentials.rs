//! Catalog page. Also the response to a purchase, carrying its outcome.

use api::UserInfo;
use axum::response::Html;
use dioxus::prelude::*;
use store::{format_credits, Product};
use ui::{Alert, AlertKind, Layout, ProductCard};

use super::render;

/// Outcome banner for the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: AlertKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }
}

#[component]
pub fn Essentials(
    #[props(!optional)] user: Option<UserInfo>,
    products: Vec<Product>,
    #[props(!optional)] notice: Option<Notice>,
) -> Element {
    let signed_in = user.is_some();
    let balance = user.as_ref().map(|u| format_credits(u.balance));

    rsx! {
        Layout {
            title: "Essentials",
            user: user,

            h1 { "Essentials" }

            {notice.map(|n| rsx! { Alert { kind: n.kind, message: n.message } })}

            {balance.map(|b| rsx! { p { class: "balance", "Your balance: {b}" } })}

            div {
                class: "products",
                for product in products {
                    ProductCard { key: "{product.id}", product: product, signed_in: signed_in }
                }
            }
        }
    }
}

pub fn essentials_page(
    user: Option<UserInfo>,
    products: Vec<Product>,
    notice: Option<Notice>,
) -> Html<String> {
    render(rsx! { Essentials { user: user, products: products, notice: notice } })
}
