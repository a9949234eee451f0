use api::UserInfo;
use axum::response::Html;
use dioxus::prelude::*;
use ui::Layout;

use super::render;

#[component]
pub fn About(#[props(!optional)] user: Option<UserInfo>) -> Element {
    rsx! {
        Layout {
            title: "About",
            user: user,

            h1 { "About" }
            p {
                "Every account receives NouCredits, a virtual currency that can be spent "
                "on the emergency supplies listed under Essentials."
            }
            p {
                "Emergency notes keep short requests or contact details in one place. "
                "Only you can see, edit or delete your notes."
            }
        }
    }
}

pub fn about_page(user: Option<UserInfo>) -> Html<String> {
    render(rsx! { About { user: user } })
}
