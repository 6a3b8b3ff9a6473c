mod cli;
mod commands;

use anyhow::Result;
use bouquet_config::Config;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (stderr, so command output stays clean)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    let config = Config::load()?;
    let source = commands::catalog_source(cli.catalog.as_deref(), &config);

    match cli.command {
        cli::Commands::Parse { bundle, format } => commands::bundle::parse(&bundle, &format),
        cli::Commands::Products {
            category,
            min_price,
            max_price,
            in_stock,
            tag,
            search,
            all,
        } => {
            let filters = bouquet_catalog::ProductFilters {
                category,
                min_price,
                max_price,
                in_stock,
                tags: tag,
                search_query: search,
            };
            let include_unavailable = all || config.catalog.include_unavailable;
            commands::catalog::products(source.as_ref(), filters, include_unavailable).await
        }
        cli::Commands::Filters => commands::catalog::filters(source.as_ref()).await,
        cli::Commands::Slots {
            product,
            selections,
            format,
        } => {
            commands::bundle::slots(source.as_ref(), &config, &product, &selections, &format)
                .await
        }
        cli::Commands::Resolve {
            product,
            selections,
            format,
        } => {
            commands::bundle::resolve(source.as_ref(), &config, &product, &selections, &format)
                .await
        }
        cli::Commands::Related { product } => {
            commands::bundle::related(source.as_ref(), &product).await
        }
        cli::Commands::Cart(cart_cmd) => {
            commands::cart::handle(cart_cmd, source.as_ref(), &config).await
        }
        cli::Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = cli::Cli::command();
            clap_complete::generate(shell, &mut cmd, "bouquet", &mut std::io::stdout());
            Ok(())
        }
    }
}
