use dioxus::prelude::*;
use store::{format_credits, Product};

/// One catalog entry with its buy button.
///
/// The button posts to the product's canonical purchase route. Anonymous
/// visitors get a login link instead.
#[component]
pub fn ProductCard(product: Product, signed_in: bool) -> Element {
    let action = product.purchase_path();
    let price = format_credits(product.price);

    rsx! {
        div {
            class: "product",
            h3 { "{product.name}" }
            p { "{price}" }
            if signed_in {
                form {
                    method: "post",
                    action: "{action}",
                    button { r#type: "submit", "Buy" }
                }
            } else {
                a { href: "/login", "Log in to buy" }
            }
        }
    }
}
