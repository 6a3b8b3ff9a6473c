//! Upsell lookup: which bundles include a given product

use crate::grammar::parse_bundle;
use crate::option::is_literal;
use crate::product::{Catalog, Product};

/// Category a product must carry to be offered as an upsell
pub const BUNDLE_CATEGORY: &str = "Bundle";

/// "Bundle"-category products whose own bundle string offers `product` as an
/// option, in catalog order. Bundles themselves are never upsold.
pub fn related_bundles<'a>(product: &Product, catalog: &'a Catalog) -> Vec<&'a Product> {
    if product.is_bundle() || (product.id.is_empty() && product.name.is_empty()) {
        return Vec::new();
    }

    catalog
        .products()
        .iter()
        .filter(|candidate| candidate.category == BUNDLE_CATEGORY && candidate.id != product.id)
        .filter(|candidate| {
            parse_bundle(candidate.bundle())
                .iter()
                .flat_map(|slot| slot.options.iter())
                .any(|option| references(option, product, catalog))
        })
        .collect()
}

fn references(option: &str, product: &Product, catalog: &Catalog) -> bool {
    if is_literal(option) {
        return false;
    }
    match catalog.find_option(option) {
        Some(found) => found.id == product.id,
        None => {
            let option = option.to_lowercase();
            option == product.id.to_lowercase() || option == product.name.to_lowercase()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("rose-red", "Red Rose"),
            Product::new("rose-redder", "Crimson Rose"),
            bundle("bundle-roses", "Roses Bundle", "rose-red/rose-pink, card"),
            bundle("bundle-crimson", "Crimson Bundle", "rose-redder, card"),
            bundle("bundle-named", "Named Bundle", "red rose"),
            bundle("bundle-quoted", "Quoted Bundle", r#""rose-red""#),
        ])
    }

    fn bundle(id: &str, name: &str, items: &str) -> Product {
        Product::new(id, name)
            .with_bundle(items)
            .with_category(BUNDLE_CATEGORY)
    }

    #[test]
    fn test_matches_by_id_and_name_not_substring() {
        let catalog = catalog();
        let rose = catalog.get("rose-red").unwrap();

        let ids: Vec<_> = related_bundles(rose, &catalog)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["bundle-roses", "bundle-named"]);
    }

    #[test]
    fn test_product_missing_from_catalog() {
        let catalog = catalog();
        let card = Product::new("card", "Card");

        assert_eq!(related_bundles(&card, &catalog).len(), 2);
    }

    #[test]
    fn test_only_bundle_category_is_upsold() {
        let catalog = Catalog::new(vec![
            Product::new("rose-red", "Red Rose"),
            Product::new("bouq-mixed", "Mixed Bouquet")
                .with_bundle("rose-red, rose-white")
                .with_category("Bouquet"),
            bundle("bundle-roses", "Roses Bundle", "rose-red/rose-pink, bouq-mixed"),
        ]);
        let rose = catalog.get("rose-red").unwrap();

        let found = related_bundles(rose, &catalog);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "bundle-roses");
        assert_eq!(found[0].category, BUNDLE_CATEGORY);
    }

    #[test]
    fn test_bundles_have_no_upsell() {
        let catalog = catalog();
        let bundle = catalog.get("bundle-roses").unwrap();

        assert!(related_bundles(bundle, &catalog).is_empty());
    }
}
