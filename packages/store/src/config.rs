//! # Catalog file — `catalog.toml`
//!
//! The catalog can be replaced at startup by pointing `catalog.path` in the
//! server settings at a TOML file with this shape:
//!
//! ```toml
//! [[products]]
//! id = 1
//! name = "Bandages"
//! price = 10
//! ```
//!
//! [`CatalogFile`] is only the serialised form. Validation happens when it is
//! turned into a [`crate::Catalog`].

use serde::Deserialize;

use crate::catalog::Product;

/// On-disk representation of the product catalog.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub products: Vec<Product>,
}

impl CatalogFile {
    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
