//! Cart store
//!
//! A configured bundle is stored as one opaque summary string on its line;
//! there is no way back from the string to selections.

use std::path::Path;

use bouquet_core::Product;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::debug;

use crate::configurator::Configurator;
use crate::{EngineError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub line_id: String,
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_details: Option<String>,
    #[serde(with = "time::serde::timestamp")]
    pub added_at: OffsetDateTime,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a cart file; a missing file is an empty cart
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Add one unit. Same product with the same bundle details bumps the
    /// existing line instead of adding a new one.
    pub fn add(&mut self, product: &Product, bundle_details: Option<String>) -> Result<&CartLine> {
        if product.stock <= 0 {
            return Err(EngineError::OutOfStock(product.name.clone()));
        }

        let existing = self
            .lines
            .iter()
            .position(|l| l.product_id == product.id && l.bundle_details == bundle_details);

        let index = match existing {
            Some(index) => {
                self.lines[index].quantity += 1;
                index
            }
            None => {
                self.lines.push(CartLine {
                    line_id: uuid::Uuid::new_v4().to_string(),
                    product_id: product.id.clone(),
                    name: product.name.clone(),
                    price: product.price,
                    quantity: 1,
                    bundle_details,
                    added_at: OffsetDateTime::now_utc(),
                });
                self.lines.len() - 1
            }
        };

        let line = &self.lines[index];
        debug!(line = %line.line_id, product = %line.product_id, quantity = line.quantity, "Added to cart");
        Ok(line)
    }

    /// Add the product being configured, only once every option is chosen
    pub fn add_configured(&mut self, configurator: &Configurator) -> Result<&CartLine> {
        let product = configurator.product();
        if !product.is_bundle() {
            return self.add(product, None);
        }
        if !configurator.is_valid() {
            return Err(EngineError::Incomplete(product.name.clone()));
        }
        self.add(product, Some(configurator.details().to_string()))
    }

    pub fn remove(&mut self, line_id: &str) -> Result<CartLine> {
        let index = self
            .lines
            .iter()
            .position(|l| l.line_id == line_id)
            .ok_or_else(|| EngineError::LineNotFound(line_id.to_string()))?;
        Ok(self.lines.remove(index))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bouquet_core::Catalog;

    use super::*;

    fn rose() -> Product {
        Product::new("rose-red", "Red Rose").with_price(100.0).with_stock(5)
    }

    #[test]
    fn test_merge_same_product_and_details() {
        let mut cart = Cart::new();
        cart.add(&rose(), None).unwrap();
        cart.add(&rose(), None).unwrap();
        cart.add(&rose(), Some("Gift wrap".to_string())).unwrap();

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), 300.0);
    }

    #[test]
    fn test_out_of_stock() {
        let mut cart = Cart::new();
        let sold_out = rose().with_stock(0);
        assert!(matches!(
            cart.add(&sold_out, None),
            Err(EngineError::OutOfStock(_))
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::new();
        let line_id = cart.add(&rose(), None).unwrap().line_id.clone();

        assert!(matches!(
            cart.remove("nope"),
            Err(EngineError::LineNotFound(_))
        ));
        let removed = cart.remove(&line_id).unwrap();
        assert_eq!(removed.product_id, "rose-red");
        assert!(cart.is_empty());

        cart.add(&rose(), None).unwrap();
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_configured_bundle_gated_on_validity() {
        let catalog = Arc::new(Catalog::new(vec![
            rose(),
            Product::new("bundle", "Rose Bundle")
                .with_bundle("rose-red/rose-pink, card")
                .with_price(600.0)
                .with_stock(2),
        ]));
        let bundle = catalog.get("bundle").unwrap().clone();
        let mut configurator = Configurator::new(bundle, catalog);
        let mut cart = Cart::new();

        assert!(matches!(
            cart.add_configured(&configurator),
            Err(EngineError::Incomplete(_))
        ));

        configurator.select("0", "rose-red").unwrap();
        let line = cart.add_configured(&configurator).unwrap();
        assert_eq!(line.bundle_details.as_deref(), Some("Red Rose, Card"));

        configurator.select("0", "rose-pink").unwrap();
        cart.add_configured(&configurator).unwrap();
        assert_eq!(cart.lines().len(), 2);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("cart.json");

        assert!(Cart::load(&path).unwrap().is_empty());

        let mut cart = Cart::new();
        cart.add(&rose(), Some("Red Rose".to_string())).unwrap();
        cart.save(&path).unwrap();

        let loaded = Cart::load(&path).unwrap();
        assert_eq!(loaded.lines().len(), 1);
        assert_eq!(loaded.lines()[0].line_id, cart.lines()[0].line_id);
        assert_eq!(loaded.lines()[0].bundle_details.as_deref(), Some("Red Rose"));
    }
}
