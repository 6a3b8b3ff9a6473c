pub mod bundle;
pub mod cart;
pub mod catalog;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use bouquet_catalog::{CatalogSource, JsonFileSource, LoadOptions, StaticSource, load_products};
use bouquet_config::Config;
use bouquet_core::{Catalog, Product};
use bouquet_engine::Configurator;

/// `--catalog` wins over the configured path; neither means the built-in catalog
pub fn catalog_source(flag: Option<&Path>, config: &Config) -> Box<dyn CatalogSource> {
    match flag.or(config.catalog.path.as_deref()) {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(StaticSource::fallback()),
    }
}

/// Full catalog snapshot, unavailable products included, for bundle work
pub async fn full_catalog(source: &dyn CatalogSource) -> Arc<Catalog> {
    let result = load_products(source, LoadOptions { include_unavailable: true }).await;
    if result.is_fallback {
        eprintln!(
            "Warning: could not read {}; using the built-in catalog",
            source.describe()
        );
    }
    Arc::new(result.into_catalog())
}

/// Configurator for `product` with `selections` applied in order
pub fn configure(
    catalog: Arc<Catalog>,
    product: Product,
    selections: &[(String, String)],
    config: &Config,
) -> Result<Configurator> {
    let mut configurator =
        Configurator::new(product, catalog).with_max_depth(config.resolver.max_depth);
    for (path, option) in selections {
        tracing::debug!(%path, %option, "applying selection");
        configurator.select(path, option)?;
    }
    Ok(configurator)
}
