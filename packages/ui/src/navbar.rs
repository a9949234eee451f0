use api::UserInfo;
use dioxus::prelude::*;
use store::format_credits;

/// Top navigation. Shows the balance and a logout link when signed in.
#[component]
pub fn Navbar(#[props(!optional)] user: Option<UserInfo>) -> Element {
    rsx! {
        nav {
            class: "navbar",
            a { class: "brand", href: "/", "Emergency Supplies" }
            a { href: "/essentials", "Essentials" }
            a { href: "/emergency", "Emergency" }
            a { href: "/credits", "Credits" }
            a { href: "/about", "About" }

            span { class: "spacer" }

            {match user {
                Some(user) => {
                    let balance = format_credits(user.balance);
                    rsx! {
                        span { class: "account", "{user.username} · {balance}" }
                        a { href: "/logout", "Log out" }
                    }
                }
                None => rsx! {
                    a { href: "/login", "Log in" }
                    a { href: "/signup", "Sign up" }
                },
            }}
        }
    }
}
