//! Catalog sources

use std::path::PathBuf;

use async_trait::async_trait;
use bouquet_core::{Catalog, Product};
use tracing::{debug, error};

use crate::fallback::fallback_products;
use crate::Result;

/// Anything that can produce the full product list
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every product, including unavailable ones
    async fn fetch(&self) -> Result<Vec<Product>>;

    /// Human-readable origin, for logs and CLI output
    fn describe(&self) -> String;
}

/// Static `products.json` snapshot on disk
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonFileSource {
    async fn fetch(&self) -> Result<Vec<Product>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let products: Vec<Product> = serde_json::from_str(&content)?;
        debug!(count = products.len(), path = %self.path.display(), "Loaded products");
        Ok(products)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// In-memory product list
pub struct StaticSource {
    products: Vec<Product>,
}

impl StaticSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The storefront's built-in catalog
    pub fn fallback() -> Self {
        Self::new(fallback_products())
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn describe(&self) -> String {
        format!("static:{} products", self.products.len())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Keep products marked `available: false`. Bundle configuration needs
    /// them to label options; storefront listings do not.
    pub include_unavailable: bool,
}

#[derive(Debug, Clone)]
pub struct ProductsResult {
    pub products: Vec<Product>,
    /// Source failed and the built-in catalog was served instead
    pub is_fallback: bool,
}

impl ProductsResult {
    pub fn into_catalog(self) -> Catalog {
        Catalog::new(self.products)
    }
}

/// Fetch from `source`, serving the built-in catalog if it fails
pub async fn load_products(source: &dyn CatalogSource, options: LoadOptions) -> ProductsResult {
    let (products, is_fallback) = match source.fetch().await {
        Ok(products) => (products, false),
        Err(e) => {
            error!(source = %source.describe(), "Failed to load products: {}", e);
            (fallback_products(), true)
        }
    };

    let products = if options.include_unavailable {
        products
    } else {
        products.into_iter().filter(Product::is_available).collect()
    };

    ProductsResult {
        products,
        is_fallback,
    }
}
