//! Slot tree: the visible configuration, one node per slot

use serde::Serialize;

use crate::grammar::parse_bundle;
use crate::option::{classify, option_label};
use crate::resolve::{ExpansionGuard, Resolver, effective_option};
use crate::selection::{SelectionState, slot_path};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotNode {
    pub path: String,
    /// 1-based position within its level ("Item 2")
    pub item: usize,
    pub is_fixed: bool,
    pub options: Vec<OptionNode>,
    /// Effective option: the fixed one, or the user's choice
    pub chosen: Option<String>,
    pub chosen_label: Option<String>,
    /// Slots of the nested bundle behind `chosen`, if any
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SlotNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionNode {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SlotNode {
    /// Selectable slot still waiting for a choice
    pub fn is_open(&self) -> bool {
        self.chosen.is_none()
    }
}

impl<'a> Resolver<'a> {
    /// Every slot the configurator shows for `bundle` under `selections`
    pub fn slot_tree(&self, bundle: &str, selections: &SelectionState) -> Vec<SlotNode> {
        let mut guard = ExpansionGuard::new(self.max_depth());
        self.tree_level(bundle, "", selections, &mut guard)
    }

    fn tree_level(
        &self,
        bundle: &str,
        prefix: &str,
        selections: &SelectionState,
        guard: &mut ExpansionGuard,
    ) -> Vec<SlotNode> {
        let catalog = self.catalog();

        parse_bundle(Some(bundle))
            .iter()
            .enumerate()
            .map(|(index, slot)| {
                let path = slot_path(prefix, index);
                let chosen = effective_option(slot, &path, selections);

                let options = slot
                    .options
                    .iter()
                    .map(|value| OptionNode {
                        value: value.clone(),
                        label: option_label(value, catalog),
                        selected: !slot.is_fixed && chosen == Some(value.as_str()),
                    })
                    .collect();

                let mut children = Vec::new();
                let mut chosen_label = None;
                if let Some(option) = chosen {
                    let kind = classify(option, catalog);
                    chosen_label = Some(kind.label());
                    if let Some(product) = kind.product()
                        && let Some(nested) = product.bundle()
                        && guard.enter(product, &path)
                    {
                        children = self.tree_level(nested, &path, selections, guard);
                        guard.leave();
                    }
                }

                SlotNode {
                    item: index + 1,
                    is_fixed: slot.is_fixed,
                    options,
                    chosen: chosen.map(String::from),
                    chosen_label,
                    children,
                    path,
                }
            })
            .collect()
    }
}

/// Depth-first lookup of the node at `path`
pub fn find_slot<'t>(tree: &'t [SlotNode], path: &str) -> Option<&'t SlotNode> {
    tree.iter().find_map(|node| {
        if node.path == path {
            Some(node)
        } else if path.starts_with(&format!("{}.", node.path)) {
            find_slot(&node.children, path)
        } else {
            None
        }
    })
}

/// Paths of selectable slots that still need a choice, in display order
pub fn open_slots(tree: &[SlotNode]) -> Vec<&str> {
    let mut open = Vec::new();
    collect_open(tree, &mut open);
    open
}

fn collect_open<'t>(tree: &'t [SlotNode], open: &mut Vec<&'t str>) {
    for node in tree {
        if node.is_open() {
            open.push(node.path.as_str());
        }
        collect_open(&node.children, open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{Catalog, Product};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("rose-red", "Red Rose"),
            Product::new("choc", "Chocolate Box").with_bundle(r#""Dark"/"Milk", ribbon"#),
            Product::new("card", "Greeting Card"),
        ])
    }

    #[test]
    fn test_tree_before_any_choice() {
        let catalog = catalog();
        let tree = Resolver::new(&catalog)
            .slot_tree("rose-red/rose-pink, choc/card", &SelectionState::new());

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].path, "0");
        assert_eq!(tree[0].item, 1);
        assert_eq!(tree[0].options[0].label, "Red Rose");
        assert_eq!(tree[0].options[1].label, "Rose Pink");
        assert!(tree[0].is_open());
        assert!(tree[1].children.is_empty());
        assert_eq!(open_slots(&tree), vec!["0", "1"]);
    }

    #[test]
    fn test_nested_children_follow_choice() {
        let catalog = catalog();
        let state: SelectionState = [("1", "choc")].into_iter().collect();
        let tree = Resolver::new(&catalog).slot_tree("rose-red/rose-pink, choc/card", &state);

        let choc = &tree[1];
        assert_eq!(choc.chosen_label.as_deref(), Some("Chocolate Box"));
        assert!(choc.options[0].selected);
        assert_eq!(choc.children.len(), 2);
        assert_eq!(choc.children[0].path, "1.0");
        assert_eq!(choc.children[0].options[0].label, "Dark");
        assert!(choc.children[1].is_fixed);
        assert_eq!(choc.children[1].chosen_label.as_deref(), Some("Ribbon"));

        assert_eq!(open_slots(&tree), vec!["0", "1.0"]);
        assert_eq!(find_slot(&tree, "1.1").unwrap().item, 2);
        assert!(find_slot(&tree, "0.0").is_none());
        assert!(find_slot(&tree, "2").is_none());
    }

    #[test]
    fn test_fixed_bundle_expands_without_selection() {
        let catalog = catalog();
        let tree = Resolver::new(&catalog).slot_tree("choc", &SelectionState::new());

        assert!(tree[0].is_fixed);
        assert!(!tree[0].options[0].selected);
        assert_eq!(tree[0].children.len(), 2);
        assert_eq!(open_slots(&tree), vec!["0.0"]);
    }

    #[test]
    fn test_cyclic_catalog_terminates() {
        let catalog = Catalog::new(vec![Product::new("loop", "Loop").with_bundle("loop/x")]);
        let state: SelectionState = [("0", "loop"), ("0.0", "loop")].into_iter().collect();
        let tree = Resolver::new(&catalog).slot_tree("loop/x", &state);

        assert_eq!(tree[0].children.len(), 1);
        assert!(tree[0].children[0].children.is_empty());
    }
}
