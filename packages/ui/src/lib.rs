//! Shared page components for the server-rendered views.

mod alert;
pub use alert::{Alert, AlertKind, FieldMessages};

mod layout;
pub use layout::Layout;

mod navbar;
pub use navbar::Navbar;

mod product_card;
pub use product_card::ProductCard;
