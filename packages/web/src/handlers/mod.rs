pub mod auth;
pub mod notes;
pub mod pages;
pub mod shop;
