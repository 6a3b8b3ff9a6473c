//! One bundle configuration session
//!
//! Owns the selection state for a single root product. Every change is
//! validated against the visible slot tree, applied through the selection
//! reducer and followed by a full re-resolve; the registered change handler
//! is called synchronously with the new result.

use std::sync::Arc;

use bouquet_core::{
    Catalog, DEFAULT_MAX_DEPTH, Product, Resolver, SelectionAction, SelectionState, SlotNode,
    ValidationResult, find_slot, open_slots, parse_path, reduce,
};
use tracing::debug;

use crate::{EngineError, Result};

/// Snapshot passed to the change handler after every update
#[derive(Debug, Clone, Copy)]
pub struct ConfigChange<'a> {
    pub is_valid: bool,
    pub selections: &'a SelectionState,
    pub details: &'a str,
    pub preview_product: Option<&'a Product>,
}

pub type ConfigChangeHandler = Box<dyn FnMut(ConfigChange<'_>) + Send>;

pub struct Configurator {
    product: Product,
    catalog: Arc<Catalog>,
    max_depth: usize,
    selections: SelectionState,
    validation: ValidationResult,
    on_change: Option<ConfigChangeHandler>,
}

impl Configurator {
    /// Start configuring `product` with nothing selected
    pub fn new(product: Product, catalog: Arc<Catalog>) -> Self {
        let mut configurator = Self {
            product,
            catalog,
            max_depth: DEFAULT_MAX_DEPTH,
            selections: SelectionState::new(),
            validation: ValidationResult {
                is_valid: false,
                details: String::new(),
                preview_product: None,
            },
            on_change: None,
        };
        configurator.validation = configurator.compute();
        configurator
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self.validation = self.compute();
        self
    }

    /// Register the change handler. It fires once right away with the
    /// current state, then after every change.
    pub fn on_config_change<F>(mut self, handler: F) -> Self
    where
        F: FnMut(ConfigChange<'_>) + Send + 'static,
    {
        self.on_change = Some(Box::new(handler));
        self.notify();
        self
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selections(&self) -> &SelectionState {
        &self.selections
    }

    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    pub fn is_valid(&self) -> bool {
        self.validation.is_valid
    }

    pub fn details(&self) -> &str {
        &self.validation.details
    }

    /// Product whose image and description should be shown: the preview
    /// product if any, else the root product
    pub fn display_product(&self) -> &Product {
        self.validation
            .preview_product
            .as_ref()
            .unwrap_or(&self.product)
    }

    pub fn slot_tree(&self) -> Vec<SlotNode> {
        match self.product.bundle() {
            Some(bundle) => self.resolver().slot_tree(bundle, &self.selections),
            None => Vec::new(),
        }
    }

    /// Paths still waiting for a choice
    pub fn open_slots(&self) -> Vec<String> {
        open_slots(&self.slot_tree())
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Choose `option` for the slot at `path`. `option` may be the raw
    /// option text or its display label (case-insensitive).
    pub fn select(&mut self, path: &str, option: &str) -> Result<&ValidationResult> {
        parse_path(path)?;

        let tree = self.slot_tree();
        let node = find_slot(&tree, path).ok_or_else(|| EngineError::UnknownSlot(path.to_string()))?;
        if node.is_fixed {
            return Err(EngineError::FixedSlot(path.to_string()));
        }
        let value = match_option(node, option).ok_or_else(|| EngineError::InvalidOption {
            path: path.to_string(),
            option: option.to_string(),
        })?;

        debug!(product = %self.product.id, path, option = value, "Selecting option");
        let action = SelectionAction::Select {
            path: path.to_string(),
            option: value.to_string(),
        };
        self.dispatch(action);
        Ok(&self.validation)
    }

    /// Discard every choice
    pub fn reset(&mut self) {
        self.dispatch(SelectionAction::Reset);
    }

    /// Configure a different root product from scratch
    pub fn switch_product(&mut self, product: Product) {
        self.product = product;
        self.dispatch(SelectionAction::Reset);
    }

    fn dispatch(&mut self, action: SelectionAction) {
        let state = std::mem::take(&mut self.selections);
        self.selections = reduce(state, action);
        self.validation = self.compute();
        self.notify();
    }

    fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.catalog).with_max_depth(self.max_depth)
    }

    fn compute(&self) -> ValidationResult {
        self.resolver()
            .resolve_product(&self.product, &self.selections)
    }

    fn notify(&mut self) {
        if let Some(handler) = self.on_change.as_mut() {
            handler(ConfigChange {
                is_valid: self.validation.is_valid,
                selections: &self.selections,
                details: &self.validation.details,
                preview_product: self.validation.preview_product.as_ref(),
            });
        }
    }
}

fn match_option<'n>(node: &'n SlotNode, option: &str) -> Option<&'n str> {
    node.options
        .iter()
        .find(|o| o.value == option)
        .or_else(|| {
            let wanted = option.to_lowercase();
            node.options
                .iter()
                .find(|o| o.value.to_lowercase() == wanted || o.label.to_lowercase() == wanted)
        })
        .map(|o| o.value.as_str())
}
