//! Data models for the application.

mod note;
mod purchase;
mod user;

pub use note::Note;
pub use purchase::Purchase;
pub use user::{User, UserInfo};
