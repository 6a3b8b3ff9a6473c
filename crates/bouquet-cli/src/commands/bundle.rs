use anyhow::Result;
use bouquet_catalog::CatalogSource;
use bouquet_config::Config;
use bouquet_core::{SlotNode, format_option_name, parse_bundle, related_bundles};

use super::{configure, full_catalog};

pub fn parse(bundle: &str, format: &str) -> Result<()> {
    let slots = parse_bundle(Some(bundle));

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&slots)?),
        _ => {
            if slots.is_empty() {
                println!("No slots.");
                return Ok(());
            }
            for (i, slot) in slots.iter().enumerate() {
                let kind = if slot.is_fixed { "fixed" } else { "choose one" };
                let options: Vec<String> =
                    slot.options.iter().map(|o| format_option_name(o)).collect();
                println!("  [{}] {}: {}", i, kind, options.join(" / "));
            }
        }
    }

    Ok(())
}

pub async fn slots(
    source: &dyn CatalogSource,
    config: &Config,
    product: &str,
    selections: &[(String, String)],
    format: &str,
) -> Result<()> {
    let catalog = full_catalog(source).await;
    let root = catalog.require(product)?.clone();
    let configurator = configure(catalog, root, selections, config)?;
    let tree = configurator.slot_tree();

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&tree)?),
        _ => {
            let product = configurator.product();
            println!("{} ({})", product.name, product.id);
            if tree.is_empty() {
                println!("  Not a bundle.");
            } else {
                print_tree(&tree, 1);
            }
        }
    }

    Ok(())
}

fn print_tree(nodes: &[SlotNode], depth: usize) {
    let indent = "  ".repeat(depth);
    for node in nodes {
        let heading = node
            .chosen_label
            .clone()
            .unwrap_or_else(|| "Choose One".to_string());
        println!("{}Item {} [{}]: {}", indent, node.item, node.path, heading);

        if !node.is_fixed {
            for option in &node.options {
                let marker = if option.selected { "*" } else { " " };
                println!("{}  {} {} ({})", indent, marker, option.label, option.value);
            }
        }

        if !node.children.is_empty() {
            if let Some(label) = &node.chosen_label {
                println!("{}  Customize {}:", indent, label);
            }
            print_tree(&node.children, depth + 2);
        }
    }
}

pub async fn resolve(
    source: &dyn CatalogSource,
    config: &Config,
    product: &str,
    selections: &[(String, String)],
    format: &str,
) -> Result<()> {
    let catalog = full_catalog(source).await;
    let root = catalog.require(product)?.clone();
    let configurator = configure(catalog, root, selections, config)?;
    let validation = configurator.validation();

    match format {
        "json" => {
            let output = serde_json::json!({
                "productId": configurator.product().id,
                "isValid": validation.is_valid,
                "selections": configurator.selections(),
                "detailsString": validation.details,
                "previewProduct": validation.preview_product,
                "openSlots": configurator.open_slots(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => {
            println!("Bundle: {}", configurator.product().name);
            if validation.is_valid {
                println!("✓ Ready: {}", validation.details);
            } else {
                println!("Select All Options");
                println!("  So far: {}", validation.details);
                println!("  Open slots: {}", configurator.open_slots().join(", "));
            }
            let shown = configurator.display_product();
            println!("  Preview: {} ({})", shown.name, shown.image_url);
        }
    }

    Ok(())
}

pub async fn related(source: &dyn CatalogSource, product: &str) -> Result<()> {
    let catalog = full_catalog(source).await;
    let product = catalog.require(product)?;
    let bundles = related_bundles(product, &catalog);

    if bundles.is_empty() {
        println!("No bundles include {}.", product.name);
        return Ok(());
    }

    println!("{} is part of:", product.name);
    for bundle in bundles {
        println!("  {} ({}) - {:.2}", bundle.name, bundle.id, bundle.price);
    }

    Ok(())
}
