use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Simple configuration for bouquet
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub cart: CartConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// products.json snapshot; the built-in catalog is used when unset
    pub path: Option<PathBuf>,

    /// List unavailable products in storefront listings too
    #[serde(default)]
    pub include_unavailable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Nested bundle levels expanded before the data is treated as broken
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartConfig {
    /// Cart file; defaults to cart.json in the data directory
    pub path: Option<PathBuf>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

fn default_max_depth() -> usize {
    16
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, writing defaults there if it does not exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(path, content)?;
            Ok(config)
        }
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = project_dirs() {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.bouquet/config.toml")
        }
    }

    /// Cart file, from config or the platform data directory
    pub fn cart_path(&self) -> PathBuf {
        if let Some(path) = &self.cart.path {
            return path.clone();
        }
        if let Some(dirs) = project_dirs() {
            dirs.data_dir().join("cart.json")
        } else {
            PathBuf::from("~/.bouquet/cart.json")
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "bouquet", "bouquet")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.resolver.max_depth, 16);
        assert!(config.catalog.path.is_none());
        assert!(!config.catalog.include_unavailable);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.resolver.max_depth, config.resolver.max_depth);
    }

    #[test]
    fn test_partial_config_parse() {
        let toml_str = r#"
[catalog]
path = "/srv/shop/products.json"

[resolver]
max_depth = 4
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.catalog.path,
            Some(PathBuf::from("/srv/shop/products.json"))
        );
        assert_eq!(config.resolver.max_depth, 4);
        assert!(config.cart.path.is_none());
    }

    #[test]
    fn test_load_from_creates_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.resolver.max_depth, 16);

        std::fs::write(&path, "[cart]\npath = \"/tmp/my-cart.json\"\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.cart_path(), PathBuf::from("/tmp/my-cart.json"));
        assert_eq!(config.resolver.max_depth, 16);
    }
}
