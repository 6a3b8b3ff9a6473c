//! Bundle resolver: validity, summary string and preview product
//!
//! Everything is recomputed from `(bundle string, selections, catalog)` on
//! each call. Nothing is cached between calls.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::grammar::{Slot, parse_bundle};
use crate::option::{OptionKind, classify};
use crate::product::{Catalog, Product};
use crate::selection::{SelectionState, slot_path};

/// Nested bundle levels expanded below the root before giving up
pub const DEFAULT_MAX_DEPTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Every selectable slot at every visited level has a choice
    pub is_valid: bool,
    /// Flattened human-readable summary, e.g. `"Red Rose, Chocolate Box (Dark)"`
    #[serde(rename = "detailsString")]
    pub details: String,
    /// Last root-level slot whose option is a catalog product
    pub preview_product: Option<Product>,
}

pub struct Resolver<'a> {
    catalog: &'a Catalog,
    max_depth: usize,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Resolve a root bundle string against the current selections
    pub fn resolve(&self, bundle: &str, selections: &SelectionState) -> ValidationResult {
        let mut guard = ExpansionGuard::new(self.max_depth);
        self.resolve_with(bundle, selections, &mut guard)
    }

    /// Resolve a root product. A product without a bundle is trivially valid.
    pub fn resolve_product(
        &self,
        product: &Product,
        selections: &SelectionState,
    ) -> ValidationResult {
        let Some(bundle) = product.bundle() else {
            return ValidationResult {
                is_valid: true,
                details: String::new(),
                preview_product: None,
            };
        };
        let mut guard = ExpansionGuard::new(self.max_depth);
        guard.chain.push(product.id.clone());
        self.resolve_with(bundle, selections, &mut guard)
    }

    fn resolve_with(
        &self,
        bundle: &str,
        selections: &SelectionState,
        guard: &mut ExpansionGuard,
    ) -> ValidationResult {
        let level = self.walk_level(bundle, "", selections, guard);
        debug!(
            valid = level.valid,
            selections = selections.len(),
            "Resolved bundle {:?}",
            bundle
        );
        ValidationResult {
            is_valid: level.valid,
            details: level.parts.join(", "),
            preview_product: level.preview.cloned(),
        }
    }

    fn walk_level(
        &self,
        bundle: &str,
        prefix: &str,
        selections: &SelectionState,
        guard: &mut ExpansionGuard,
    ) -> Level<'a> {
        let mut level = Level {
            valid: true,
            parts: Vec::new(),
            preview: None,
        };

        for (index, slot) in parse_bundle(Some(bundle)).iter().enumerate() {
            let path = slot_path(prefix, index);
            let Some(option) = effective_option(slot, &path, selections) else {
                level.valid = false;
                continue;
            };

            let kind = classify(option, self.catalog);
            let mut part = kind.label();

            if let OptionKind::CatalogRef(product) = kind {
                level.preview = Some(product);

                if let Some(nested) = product.bundle() {
                    if guard.enter(product, &path) {
                        let inner = self.walk_level(nested, &path, selections, guard);
                        guard.leave();

                        level.valid &= inner.valid;
                        if !inner.parts.is_empty() {
                            part = format!("{} ({})", part, inner.parts.join(", "));
                        }
                    } else {
                        level.valid = false;
                    }
                }
            }

            level.parts.push(part);
        }

        level
    }
}

/// Convenience form of [`Resolver::resolve`] with the default depth limit
pub fn resolve(bundle: &str, selections: &SelectionState, catalog: &Catalog) -> ValidationResult {
    Resolver::new(catalog).resolve(bundle, selections)
}

/// Fixed slots use their only option; selectable slots use the stored choice
pub(crate) fn effective_option<'s>(
    slot: &'s Slot,
    path: &str,
    selections: &'s SelectionState,
) -> Option<&'s str> {
    if slot.is_fixed {
        slot.fixed_option()
    } else {
        selections.get(path)
    }
}

struct Level<'a> {
    valid: bool,
    parts: Vec<String>,
    preview: Option<&'a Product>,
}

/// Tracks the products being expanded so cyclic or runaway catalog data
/// stops instead of recursing forever
pub(crate) struct ExpansionGuard {
    chain: Vec<String>,
    depth: usize,
    max_depth: usize,
}

impl ExpansionGuard {
    pub(crate) fn new(max_depth: usize) -> Self {
        Self {
            chain: Vec::new(),
            depth: 0,
            max_depth,
        }
    }

    /// Returns false (and logs) when `product` must not be expanded at `path`
    pub(crate) fn enter(&mut self, product: &Product, path: &str) -> bool {
        if self.chain.iter().any(|id| id == &product.id) {
            warn!(
                product = %product.id,
                path,
                chain = ?self.chain,
                "Cyclic bundle reference in catalog; nested bundle not expanded"
            );
            return false;
        }
        if self.depth >= self.max_depth {
            warn!(
                product = %product.id,
                path,
                max_depth = self.max_depth,
                "Bundle nesting too deep; nested bundle not expanded"
            );
            return false;
        }
        self.chain.push(product.id.clone());
        self.depth += 1;
        true
    }

    pub(crate) fn leave(&mut self) {
        self.chain.pop();
        self.depth -= 1;
    }
}
