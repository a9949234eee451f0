//! # Product catalog
//!
//! The catalog is a fixed table of purchasable items. It is built once at
//! startup, either from [`Catalog::default`] (the ten built-in emergency
//! supplies) or from a `catalog.toml` file, and is read-only afterwards. The
//! web server keeps it behind an `Arc` in its shared state.
//!
//! Every catalog handed out by [`Catalog::new`] satisfies:
//!
//! - at least one product,
//! - product ids are unique,
//! - product names are non-blank and unique,
//! - prices are strictly positive.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::CatalogFile;
use crate::models::Credits;

/// Identifier of a product in the catalog.
pub type ProductId = u32;

/// A purchasable item.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Credits,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Credits) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Canonical purchase route for this product: `/buy/{id}`.
    pub fn purchase_path(&self) -> String {
        format!("/buy/{}", self.id)
    }

    /// Older per-product route: `/buy` for product 1, `/buy{id}` for the rest.
    pub fn legacy_path(&self) -> String {
        if self.id == 1 {
            "/buy".to_string()
        } else {
            format!("/buy{}", self.id)
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} - {} NouCredits", self.id, self.name, self.price)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog contains no products")]
    Empty,

    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    #[error("duplicate product name {0:?}")]
    DuplicateName(String),

    #[error("product {0} has a blank name")]
    BlankName(ProductId),

    #[error("product {id} has non-positive price {price}")]
    NonPositivePrice { id: ProductId, price: Credits },

    #[error("invalid catalog file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Immutable, validated product table.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, checking the table invariants.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for product in &products {
            if product.name.trim().is_empty() {
                return Err(CatalogError::BlankName(product.id));
            }
            if product.price <= 0 {
                return Err(CatalogError::NonPositivePrice {
                    id: product.id,
                    price: product.price,
                });
            }
            if !ids.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if !names.insert(product.name.as_str()) {
                return Err(CatalogError::DuplicateName(product.name.clone()));
            }
        }

        Ok(Self { products })
    }

    /// Parse and validate a catalog from TOML.
    pub fn from_toml(s: &str) -> Result<Self, CatalogError> {
        let file = CatalogFile::from_toml(s)?;
        Self::new(file.products)
    }

    /// Read and validate a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    /// The built-in emergency supplies.
    fn default() -> Self {
        Self {
            products: vec![
                Product::new(1, "Bandages", 10),
                Product::new(2, "Food packets", 20),
                Product::new(3, "Water", 5),
                Product::new(4, "Oral Rehydration Solution", 15),
                Product::new(5, "Jackets", 20),
                Product::new(6, "General medicines", 15),
                Product::new(7, "Helmet", 20),
                Product::new(8, "Climbing ropes", 5),
                Product::new(9, "Backpack", 20),
                Product::new(10, "Binoculars", 20),
            ],
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 10);

        // The built-in table must pass the same checks as a loaded one
        let rebuilt = Catalog::new(catalog.products().to_vec()).unwrap();
        assert_eq!(rebuilt, catalog);
    }

    #[test]
    fn test_get_product() {
        let catalog = Catalog::default();

        let water = catalog.get(3).unwrap();
        assert_eq!(water.name, "Water");
        assert_eq!(water.price, 5);

        assert!(catalog.get(0).is_none());
        assert!(catalog.get(11).is_none());
    }

    #[test]
    fn test_product_display() {
        let product = Product::new(1, "Bandages", 10);
        assert_eq!(product.to_string(), "1. Bandages - 10 NouCredits");
    }

    #[test]
    fn test_paths() {
        let catalog = Catalog::default();
        assert_eq!(catalog.get(1).unwrap().legacy_path(), "/buy");
        assert_eq!(catalog.get(2).unwrap().legacy_path(), "/buy2");
        assert_eq!(catalog.get(10).unwrap().legacy_path(), "/buy10");
        assert_eq!(catalog.get(10).unwrap().purchase_path(), "/buy/10");
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(Catalog::new(vec![]), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let result = Catalog::new(vec![
            Product::new(1, "Water", 5),
            Product::new(1, "Helmet", 20),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn test_rejects_duplicate_name() {
        let result = Catalog::new(vec![
            Product::new(1, "Water", 5),
            Product::new(2, "Water", 6),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateName(name)) if name == "Water"));
    }

    #[test]
    fn test_rejects_bad_price_and_name() {
        let free = Catalog::new(vec![Product::new(1, "Water", 0)]);
        assert!(matches!(
            free,
            Err(CatalogError::NonPositivePrice { id: 1, price: 0 })
        ));

        let blank = Catalog::new(vec![Product::new(4, "  ", 3)]);
        assert!(matches!(blank, Err(CatalogError::BlankName(4))));
    }

    #[test]
    fn test_from_toml() {
        let catalog = Catalog::from_toml(
            r#"
            [[products]]
            id = 5
            name = "Radio"
            price = 30
            "#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(5).unwrap().name, "Radio");

        assert!(matches!(Catalog::from_toml(""), Err(CatalogError::Empty)));
        assert!(matches!(
            Catalog::from_toml("products = 3"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load("/nonexistent/catalog.toml");
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
