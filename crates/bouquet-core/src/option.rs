//! Option token classification and display labels

use crate::product::{Catalog, Product};

/// What a single option token refers to, decided once per token
#[derive(Debug, Clone, PartialEq)]
pub enum OptionKind<'a> {
    /// Quoted text, shown verbatim without the quotes
    Literal(String),
    /// Unquoted token that matched a catalog product
    CatalogRef(&'a Product),
    /// Unquoted token with no catalog match
    PlainText(String),
}

impl<'a> OptionKind<'a> {
    pub fn product(&self) -> Option<&'a Product> {
        match self {
            OptionKind::CatalogRef(product) => Some(product),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            OptionKind::Literal(text) => text.clone(),
            OptionKind::CatalogRef(product) => product.name.clone(),
            OptionKind::PlainText(token) => format_words(token),
        }
    }
}

/// Classify a token against the catalog. Literals are never looked up.
pub fn classify<'a>(token: &str, catalog: &'a Catalog) -> OptionKind<'a> {
    if let Some(text) = unquote(token) {
        return OptionKind::Literal(text.to_string());
    }
    match catalog.find_option(token) {
        Some(product) => OptionKind::CatalogRef(product),
        None => OptionKind::PlainText(token.to_string()),
    }
}

/// The inner text of a token wrapped in matching single or double quotes
pub fn unquote(token: &str) -> Option<&str> {
    let first = token.chars().next()?;
    if (first == '"' || first == '\'') && token.len() >= 2 && token.ends_with(first) {
        Some(&token[1..token.len() - 1])
    } else {
        None
    }
}

pub fn is_literal(token: &str) -> bool {
    unquote(token).is_some()
}

/// Display text for a token without catalog knowledge:
/// `"rose-red"` becomes `"Rose Red"`, `'"Happy Birthday"'` becomes `"Happy Birthday"`
pub fn format_option_name(token: &str) -> String {
    match unquote(token) {
        Some(text) => text.to_string(),
        None => format_words(token),
    }
}

/// Product name when the token resolves to one, formatted text otherwise
pub fn option_label(token: &str, catalog: &Catalog) -> String {
    classify(token, catalog).label()
}

fn format_words(token: &str) -> String {
    token
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("rose-red", "Red Rose"),
            Product::new("choc", "Chocolate Box"),
        ])
    }

    #[test]
    fn test_literal_passthrough() {
        assert_eq!(format_option_name(r#""Happy Birthday""#), "Happy Birthday");
        assert_eq!(format_option_name("'with-hyphen'"), "with-hyphen");
    }

    #[test]
    fn test_reference_formatting() {
        assert_eq!(format_option_name("rose-red"), "Rose Red");
        assert_eq!(format_option_name("card"), "Card");
        assert_eq!(format_option_name("mystery-item"), "Mystery Item");
    }

    #[test]
    fn test_mismatched_quotes_are_not_literal() {
        assert!(!is_literal(r#""open"#));
        assert!(!is_literal(r#""mixed'"#));
        assert!(!is_literal(r#"""#));
        assert!(is_literal(r#""""#));
    }

    #[test]
    fn test_classify() {
        let catalog = catalog();

        assert_eq!(
            classify("ROSE-RED", &catalog).product().map(|p| p.id.as_str()),
            Some("rose-red")
        );
        assert_eq!(
            classify(r#""choc""#, &catalog),
            OptionKind::Literal("choc".to_string())
        );
        assert_eq!(
            classify("tulip", &catalog),
            OptionKind::PlainText("tulip".to_string())
        );
    }

    #[test]
    fn test_option_label() {
        let catalog = catalog();

        assert_eq!(option_label("rose-red", &catalog), "Red Rose");
        assert_eq!(option_label("chocolate box", &catalog), "Chocolate Box");
        assert_eq!(option_label("rose-pink", &catalog), "Rose Pink");
        assert_eq!(option_label("rose-red", &Catalog::empty()), "Rose Red");
    }
}
