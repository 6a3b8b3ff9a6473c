//! Product domain model and catalog snapshot

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CoreError, Result};

/// A storefront product, as stored in `products.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    /// Bundle definition string; absent for plain products
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_items: Option<String>,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: 0.0,
            category: String::new(),
            stock: 0,
            image_url: String::new(),
            description: None,
            tags: Vec::new(),
            available: None,
            bundle_items: None,
        }
    }

    pub fn with_bundle(mut self, bundle_items: impl Into<String>) -> Self {
        self.bundle_items = Some(bundle_items.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Bundle string, if this product is a bundle
    pub fn bundle(&self) -> Option<&str> {
        self.bundle_items
            .as_deref()
            .filter(|items| !items.trim().is_empty())
    }

    pub fn is_bundle(&self) -> bool {
        self.bundle().is_some()
    }

    /// Products are available unless explicitly marked otherwise
    pub fn is_available(&self) -> bool {
        self.available != Some(false)
    }

    pub fn stock_status(&self) -> StockStatus {
        match self.stock {
            n if n <= 0 => StockStatus::OutOfStock,
            n if n < 5 => StockStatus::Low(n),
            n if n < 10 => StockStatus::Limited(n),
            _ => StockStatus::InStock,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    OutOfStock,
    Low(i64),
    Limited(i64),
    InStock,
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockStatus::OutOfStock => write!(f, "Out of Stock"),
            StockStatus::Low(n) => write!(f, "Only {} left!", n),
            StockStatus::Limited(n) => write!(f, "{} left", n),
            StockStatus::InStock => write!(f, "In Stock"),
        }
    }
}

/// Immutable, fully loaded product list that bundle options are resolved against
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Catalog that has not loaded yet; every reference resolves as plain text
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::new(products))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Exact id lookup
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Exact id lookup, then the case-insensitive `find_option` lookup,
    /// failing with `ProductNotFound`
    pub fn require(&self, id: &str) -> Result<&Product> {
        self.get(id)
            .or_else(|| self.find_option(id))
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    /// Resolve an unquoted option token: case-insensitive id match wins over
    /// a case-insensitive name match
    pub fn find_option(&self, token: &str) -> Option<&Product> {
        let needle = token.to_lowercase();
        self.products
            .iter()
            .find(|p| p.id.to_lowercase() == needle)
            .or_else(|| {
                self.products
                    .iter()
                    .find(|p| p.name.to_lowercase() == needle)
            })
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}
