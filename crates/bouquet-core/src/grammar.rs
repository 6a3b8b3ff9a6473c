//! Bundle string grammar
//!
//! ```text
//! bundle    := segment (',' segment)*
//! segment   := option ('/' option)*
//! option    := literal | reference
//! literal   := '"' text '"' | "'" text "'"
//! reference := any run of characters not containing ',' or '/' (trimmed)
//! ```
//!
//! Parsing is permissive: empty segments and empty options are dropped,
//! nothing is ever rejected.

use serde::{Deserialize, Serialize};

/// One comma-separated unit of a bundle string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// `/`-separated alternatives, in authoring order. Never empty.
    pub options: Vec<String>,
    /// Exactly one option: nothing for the user to choose
    pub is_fixed: bool,
}

impl Slot {
    fn from_options(options: Vec<String>) -> Option<Self> {
        if options.is_empty() {
            return None;
        }
        let is_fixed = options.len() == 1;
        Some(Self { options, is_fixed })
    }

    /// The option used without consulting selections (fixed slots only)
    pub fn fixed_option(&self) -> Option<&str> {
        if self.is_fixed {
            self.options.first().map(String::as_str)
        } else {
            None
        }
    }

    pub fn contains(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    /// Raw heading for the slot: the option itself when fixed
    pub fn label(&self) -> &str {
        match self.fixed_option() {
            Some(option) => option,
            None => "Select Option",
        }
    }
}

/// Parse a bundle string into slots, left to right. Absent or blank input
/// yields no slots.
pub fn parse_bundle(bundle: Option<&str>) -> Vec<Slot> {
    let Some(bundle) = bundle else {
        return Vec::new();
    };

    bundle
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| {
            let options = segment
                .split('/')
                .map(str::trim)
                .filter(|option| !option.is_empty())
                .map(String::from)
                .collect();
            Slot::from_options(options)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(options: &[&str]) -> Slot {
        Slot {
            options: options.iter().map(|o| o.to_string()).collect(),
            is_fixed: options.len() == 1,
        }
    }

    #[test]
    fn test_selectable_then_fixed() {
        assert_eq!(
            parse_bundle(Some("a/b, c")),
            vec![slot(&["a", "b"]), slot(&["c"])]
        );
    }

    #[test]
    fn test_single_option_is_fixed() {
        let slots = parse_bundle(Some("x"));
        assert_eq!(slots.len(), 1);
        assert!(slots[0].is_fixed);
        assert_eq!(slots[0].fixed_option(), Some("x"));
        assert_eq!(slots[0].label(), "x");
    }

    #[test]
    fn test_absent_and_blank_input() {
        assert!(parse_bundle(None).is_empty());
        assert!(parse_bundle(Some("")).is_empty());
        assert!(parse_bundle(Some("  ,  , ")).is_empty());
    }

    #[test]
    fn test_empty_segments_and_options_dropped() {
        let slots = parse_bundle(Some("a,,b/ /c,/,"));
        assert_eq!(slots, vec![slot(&["a"]), slot(&["b", "c"])]);
    }

    #[test]
    fn test_segment_count_bounded_by_commas() {
        for input in ["a,b,c", "a,,c", ",", "a/b,c/d,e,", "x"] {
            let commas = input.matches(',').count();
            let slots = parse_bundle(Some(input));
            assert!(slots.len() <= commas + 1, "{input}");
            assert!(slots.iter().all(|s| !s.options.is_empty()));
        }
        assert_eq!(parse_bundle(Some("a,b,c")).len(), 3);
    }

    #[test]
    fn test_literal_options_kept_verbatim() {
        let slots = parse_bundle(Some(r#""Happy Birthday"/"Congratulations", card"#));
        assert_eq!(slots[0].options, vec![r#""Happy Birthday""#, r#""Congratulations""#]);
        assert!(!slots[0].is_fixed);
        assert_eq!(slots[0].label(), "Select Option");
        assert!(slots[0].contains(r#""Congratulations""#));
    }
}
