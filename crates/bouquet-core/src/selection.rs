//! Selection state for one bundle configuration and its reducer
//!
//! Keys are slot paths: dot-joined zero-based slot indices, one segment per
//! nesting level (`"0"`, `"1.0"`, `"1.0.2"`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::grammar::parse_bundle;
use crate::{CoreError, Result};

/// Path of the slot at `index` below `prefix` (`""` for the root level)
pub fn slot_path(prefix: &str, index: usize) -> String {
    if prefix.is_empty() {
        index.to_string()
    } else {
        format!("{}.{}", prefix, index)
    }
}

/// Split a slot path into its indices
pub fn parse_path(path: &str) -> Result<Vec<usize>> {
    if path.is_empty() {
        return Err(CoreError::InvalidPath(path.to_string()));
    }
    path.split('.')
        .map(|segment| {
            segment
                .parse::<usize>()
                .map_err(|_| CoreError::InvalidPath(path.to_string()))
        })
        .collect()
}

/// Chosen option per selectable slot path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState {
    choices: BTreeMap<String, String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Legacy flat-bundle initialization: fixed root slots are stored under
    /// their index up front. Resolution ignores stored values for fixed
    /// slots, so this resolves identically to an empty state.
    pub fn seeded(bundle: Option<&str>) -> Self {
        let choices = parse_bundle(bundle)
            .into_iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.fixed_option()
                    .map(|option| (index.to_string(), option.to_string()))
            })
            .collect();
        Self { choices }
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.choices.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.choices.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Pick `option` for the slot at `path`, dropping every selection below it
    pub fn select(&mut self, path: &str, option: &str) {
        let descendant_prefix = format!("{}.", path);
        self.choices
            .retain(|key, _| !key.starts_with(&descendant_prefix));
        self.choices.insert(path.to_string(), option.to_string());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SelectionState {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            choices: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Pure form of [`SelectionState::select`]
pub fn apply_selection(selections: &SelectionState, path: &str, option: &str) -> SelectionState {
    let mut next = selections.clone();
    next.select(path, option);
    next
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    Select { path: String, option: String },
    /// Root product changed or the configuration was discarded
    Reset,
}

pub fn reduce(state: SelectionState, action: SelectionAction) -> SelectionState {
    match action {
        SelectionAction::Select { path, option } => {
            let mut next = state;
            next.select(&path, &option);
            next
        }
        SelectionAction::Reset => SelectionState::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_path() {
        assert_eq!(slot_path("", 0), "0");
        assert_eq!(slot_path("1", 2), "1.2");
        assert_eq!(slot_path("1.0", 3), "1.0.3");
    }

    #[test]
    fn test_parse_path() {
        assert_eq!(parse_path("1.0.2").unwrap(), vec![1, 0, 2]);
        assert!(parse_path("").is_err());
        assert!(parse_path("1..2").is_err());
        assert!(parse_path("a.1").is_err());
    }

    #[test]
    fn test_reselect_purges_descendants() {
        let state: SelectionState =
            [("0", "x"), ("0.0", "y"), ("0.1.3", "z"), ("1", "w"), ("10", "v")]
                .into_iter()
                .collect();

        let next = apply_selection(&state, "0", "productX");

        assert_eq!(next.get("0"), Some("productX"));
        assert!(next.iter().all(|(k, _)| !k.starts_with("0.")));
        assert_eq!(next.get("1"), Some("w"));
        assert_eq!(next.get("10"), Some("v"));
        // input untouched
        assert_eq!(state.get("0.0"), Some("y"));
    }

    #[test]
    fn test_sibling_prefix_not_purged() {
        let state: SelectionState = [("1.0", "a"), ("11.0", "b")].into_iter().collect();
        let next = apply_selection(&state, "1", "c");

        assert_eq!(next.get("1.0"), None);
        assert_eq!(next.get("11.0"), Some("b"));
    }

    #[test]
    fn test_reduce() {
        let state = reduce(
            SelectionState::new(),
            SelectionAction::Select {
                path: "0".to_string(),
                option: "a".to_string(),
            },
        );
        assert_eq!(state.get("0"), Some("a"));

        let state = reduce(state, SelectionAction::Reset);
        assert!(state.is_empty());
    }

    #[test]
    fn test_seeded_only_fixed_root_slots() {
        let state = SelectionState::seeded(Some("a/b, c, d/e, f"));
        assert_eq!(state.len(), 2);
        assert_eq!(state.get("1"), Some("c"));
        assert_eq!(state.get("3"), Some("f"));
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let state: SelectionState = [("1.0", "Dark"), ("0", "rose-red")].into_iter().collect();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"0":"rose-red","1.0":"Dark"}"#);
    }
}
