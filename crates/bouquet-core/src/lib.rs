//! Core domain models and logic for bouquet
//!
//! This crate contains:
//! - Domain models (Product, Catalog)
//! - Bundle grammar parser and option resolution
//! - Selection state reducer
//! - Recursive bundle resolver and slot tree

pub mod error;
pub mod grammar;
pub mod option;
pub mod product;
pub mod related;
pub mod resolve;
pub mod selection;
pub mod tree;

pub use error::{CoreError, Result};
pub use grammar::{Slot, parse_bundle};
pub use option::{OptionKind, classify, format_option_name, option_label};
pub use product::{Catalog, Product, StockStatus};
pub use related::{BUNDLE_CATEGORY, related_bundles};
pub use resolve::{DEFAULT_MAX_DEPTH, Resolver, ValidationResult, resolve};
pub use selection::{
    SelectionAction, SelectionState, apply_selection, parse_path, reduce, slot_path,
};
pub use tree::{OptionNode, SlotNode, find_slot, open_slots};
