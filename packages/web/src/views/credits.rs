use api::{Purchase, UserInfo};
use axum::response::Html;
use dioxus::prelude::*;
use store::format_credits;
use ui::Layout;

use super::render;

/// Balance and purchase history.
#[component]
pub fn Credits(user: UserInfo, history: Vec<Purchase>) -> Element {
    let balance = format_credits(user.balance);

    rsx! {
        Layout {
            title: "Credits",
            user: Some(user),

            h1 { "Credits" }
            p { class: "balance", "Your balance: {balance}" }

            h2 { "Purchases" }
            if history.is_empty() {
                p { class: "empty", "Nothing bought yet." }
            } else {
                table {
                    thead {
                        tr {
                            th { "When" }
                            th { "Item" }
                            th { "Price" }
                            th { "Balance after" }
                        }
                    }
                    tbody {
                        for entry in history {
                            tr {
                                key: "{entry.id}",
                                td { "{entry.created_at}" }
                                td { "{entry.product_name}" }
                                td { "{entry.price}" }
                                td { "{entry.balance_after}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn credits_page(user: UserInfo, history: Vec<Purchase>) -> Html<String> {
    render(rsx! { Credits { user: user, history: history } })
}
