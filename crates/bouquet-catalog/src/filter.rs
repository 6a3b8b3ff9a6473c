//! Storefront listing filters

use bouquet_core::Product;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilters {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    #[serde(default)]
    pub in_stock: bool,
    /// Matches products carrying at least one of these tags
    #[serde(default)]
    pub tags: Vec<String>,
    pub search_query: Option<String>,
}

impl ProductFilters {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category
            && &product.category != category
        {
            return false;
        }

        if let Some(min) = self.min_price
            && product.price < min
        {
            return false;
        }
        if let Some(max) = self.max_price
            && product.price > max
        {
            return false;
        }

        if self.in_stock && product.stock <= 0 {
            return false;
        }

        if !self.tags.is_empty() && !self.tags.iter().any(|tag| product.tags.contains(tag)) {
            return false;
        }

        if let Some(query) = self.search_query.as_deref().filter(|q| !q.is_empty()) {
            let query = query.to_lowercase();
            let hit = |text: &str| text.to_lowercase().contains(&query);

            let matched = hit(&product.name)
                || product.description.as_deref().is_some_and(hit)
                || hit(&product.category)
                || product.tags.iter().any(|t| hit(t.as_str()));
            if !matched {
                return false;
            }
        }

        true
    }
}

pub fn filter_products<'a>(products: &'a [Product], filters: &ProductFilters) -> Vec<&'a Product> {
    products.iter().filter(|p| filters.matches(p)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Filter choices offered for a product list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    /// None for an empty list
    pub price_range: Option<PriceRange>,
}

pub fn extract_filters(products: &[Product]) -> FilterOptions {
    let mut categories: Vec<String> = products.iter().map(|p| p.category.clone()).collect();
    categories.sort();
    categories.dedup();

    let mut tags: Vec<String> = products.iter().flat_map(|p| p.tags.clone()).collect();
    tags.sort();
    tags.dedup();

    let price_range = products.iter().map(|p| p.price).fold(None, |range, price| {
        Some(match range {
            None => PriceRange {
                min: price,
                max: price,
            },
            Some(PriceRange { min, max }) => PriceRange {
                min: min.min(price),
                max: max.max(price),
            },
        })
    });

    FilterOptions {
        categories,
        tags,
        price_range,
    }
}
