//! # API crate — server logic for the emergency supplies app
//!
//! Everything the web layer does with state goes through this crate. Handlers
//! pass in the shared [`sqlx::SqlitePool`] and the read-only [`store::Catalog`];
//! nothing here keeps global state.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Signup/login forms, account registration and credential checks, Argon2id hashing, session sign-in/out |
//! | [`db`] | SQLite pool construction and embedded migrations |
//! | [`models`] | Database rows (`User`, `Note`, `Purchase`) and the render-safe `UserInfo` |
//! | [`notes`] | Note manager: create, list, get, update, delete with an ownership check |
//! | [`purchase`] | Atomic balance deduction plus purchase ledger |
//! | [`settings`] | Layered configuration (defaults, `config.toml`, environment) |
//! | [`validation`] | Field-level form validation shared by auth and notes |

pub mod auth;
pub mod db;
pub mod models;
pub mod notes;
pub mod purchase;
pub mod settings;
pub mod validation;

pub use models::{Note, Purchase, User, UserInfo};
pub use settings::Settings;
pub use validation::FieldErrors;
