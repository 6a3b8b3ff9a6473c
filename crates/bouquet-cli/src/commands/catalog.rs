use anyhow::Result;
use bouquet_catalog::{
    CatalogSource, LoadOptions, ProductFilters, extract_filters, filter_products, load_products,
};

pub async fn products(
    source: &dyn CatalogSource,
    filters: ProductFilters,
    include_unavailable: bool,
) -> Result<()> {
    let result = load_products(source, LoadOptions { include_unavailable }).await;
    if result.is_fallback {
        println!("(showing built-in catalog)");
    }

    let found = filter_products(&result.products, &filters);
    if found.is_empty() {
        println!("No products found.");
        return Ok(());
    }

    println!("Products ({}):", found.len());
    for product in found {
        let kind = if product.is_bundle() { " [bundle]" } else { "" };
        println!("  {} ({}){}", product.name, product.id, kind);
        println!(
            "    {} - {:.2} - {}",
            product.category,
            product.price,
            product.stock_status()
        );
    }

    Ok(())
}

pub async fn filters(source: &dyn CatalogSource) -> Result<()> {
    let result = load_products(source, LoadOptions::default()).await;
    let options = extract_filters(&result.products);

    println!("Categories: {}", options.categories.join(", "));
    if !options.tags.is_empty() {
        println!("Tags: {}", options.tags.join(", "));
    }
    if let Some(range) = options.price_range {
        println!("Price range: {:.2} - {:.2}", range.min, range.max);
    }

    Ok(())
}
