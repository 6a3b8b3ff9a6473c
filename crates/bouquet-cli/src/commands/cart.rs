use anyhow::Result;
use bouquet_catalog::CatalogSource;
use bouquet_config::Config;
use bouquet_engine::Cart;

use super::{configure, full_catalog};
use crate::cli::CartCommands;

pub async fn handle(cmd: CartCommands, source: &dyn CatalogSource, config: &Config) -> Result<()> {
    let path = config.cart_path();
    let mut cart = Cart::load(&path)?;

    match cmd {
        CartCommands::List => {
            list(&cart);
            return Ok(());
        }
        CartCommands::Add {
            product,
            selections,
        } => {
            let catalog = full_catalog(source).await;
            let root = catalog.require(&product)?.clone();
            let configurator = configure(catalog, root, &selections, config)?;

            if !configurator.is_valid() {
                anyhow::bail!(
                    "Select All Options: {} still needs {}",
                    configurator.product().name,
                    configurator.open_slots().join(", ")
                );
            }

            let line = cart.add_configured(&configurator)?;
            println!("✓ Added {} (x{})", line.name, line.quantity);
            if let Some(details) = &line.bundle_details {
                println!("  {}", details);
            }
        }
        CartCommands::Remove { line_id } => {
            let line = cart.remove(&line_id)?;
            println!("✓ Removed {} from the cart", line.name);
        }
        CartCommands::Clear => {
            cart.clear();
            println!("✓ Cart cleared");
        }
    }

    cart.save(&path)?;
    Ok(())
}

fn list(cart: &Cart) {
    if cart.is_empty() {
        println!("Cart is empty.");
        return;
    }

    println!("Cart ({} items):", cart.item_count());
    for line in cart.lines() {
        println!(
            "  [{}] {} x{} - {:.2}",
            line.line_id,
            line.name,
            line.quantity,
            line.subtotal()
        );
        if let Some(details) = &line.bundle_details {
            println!("    {}", details);
        }
    }
    println!("Total: {:.2}", cart.total());
}
