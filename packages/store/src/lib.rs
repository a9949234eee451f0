pub mod catalog;
pub mod config;
pub mod models;

pub use catalog::{Catalog, CatalogError, Product, ProductId};
pub use config::CatalogFile;
pub use models::{format_credits, Credits, Receipt};
