//! Catalog collaborator for bouquet
//!
//! This crate provides:
//! - Product sources (JSON snapshot, in-memory, built-in fallback)
//! - Storefront listing filters

pub mod error;
pub mod fallback;
pub mod filter;
pub mod source;

pub use error::{CatalogError, Result};
pub use filter::{FilterOptions, PriceRange, ProductFilters, extract_filters, filter_products};
pub use source::{CatalogSource, JsonFileSource, LoadOptions, ProductsResult, StaticSource, load_products};
