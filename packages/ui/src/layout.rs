//! Full-page shell shared by every server-rendered view.

use api::UserInfo;
use dioxus::prelude::*;

use crate::Navbar;

const CSS: &str = r#"
body { margin: 0; font-family: sans-serif; color: #37352f; background: #fbfbfa; }
.navbar { display: flex; gap: 1rem; align-items: center; padding: 0.75rem 1.5rem; background: #24292e; }
.navbar a, .navbar .account { color: #ffffff; text-decoration: none; font-size: 0.9375rem; }
.navbar .brand { font-weight: 700; }
.navbar .spacer { flex: 1; }
main { max-width: 860px; margin: 2rem auto; padding: 0 1rem; }
.alert { padding: 0.75rem 1rem; border-radius: 4px; margin-bottom: 1rem; }
.alert-success { background: #e6f4ea; color: #1e4620; }
.alert-error { background: #fdecea; color: #611a15; }
.field { display: flex; flex-direction: column; gap: 0.25rem; margin-bottom: 0.75rem; }
.field-error { color: #b3261e; font-size: 0.8125rem; margin: 0; }
.products { display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 1rem; }
.product { border: 1px solid #e3e2e0; border-radius: 6px; padding: 1rem; background: #ffffff; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: 0.5rem; border-bottom: 1px solid #e3e2e0; }
"#;

/// Document head and body. The caller supplies the surrounding `<html>` element.
#[component]
pub fn Layout(title: String, #[props(!optional)] user: Option<UserInfo>, children: Element) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{title} · Emergency Supplies" }
            style { {CSS} }
        }
        body {
            Navbar { user: user }
            main {
                {children}
            }
        }
    }
}
