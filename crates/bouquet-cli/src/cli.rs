use std::path::PathBuf;
use std::sync::LazyLock;

use clap::{Parser, Subcommand};
use regex::Regex;

// Matches: 0, 1.0, 1.0.2
static PATH_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+(\.\d+)*$").unwrap());

#[derive(Parser)]
#[command(name = "bouquet")]
#[command(about = "Bundle configuration for the storefront catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// products.json to read (default from config, else the built-in catalog)
    #[arg(long, global = true, env = "BOUQUET_CATALOG")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a bundle string into slots
    Parse {
        /// Bundle string, e.g. "rose-red/rose-pink, choc"
        bundle: String,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List products
    Products {
        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        min_price: Option<f64>,

        #[arg(long)]
        max_price: Option<f64>,

        /// Only products with stock left
        #[arg(long)]
        in_stock: bool,

        /// Match any of these tags
        #[arg(long)]
        tag: Vec<String>,

        /// Case-insensitive search over name, description, category and tags
        #[arg(long)]
        search: Option<String>,

        /// Include unavailable products
        #[arg(long)]
        all: bool,
    },

    /// Show available categories, tags and price range
    Filters,

    /// Show the slots of a bundle product
    Slots {
        /// Product id or name
        product: String,

        /// Selections to apply first, e.g. --select 0=rose-red --select 1.0=Dark
        #[arg(long = "select", value_parser = parse_selection)]
        selections: Vec<(String, String)>,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Apply selections to a bundle product and print the result
    Resolve {
        /// Product id or name
        product: String,

        #[arg(long = "select", value_parser = parse_selection)]
        selections: Vec<(String, String)>,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List bundles that include a product
    Related {
        /// Product id or name
        product: String,
    },

    /// Manage the cart
    #[command(subcommand)]
    Cart(CartCommands),

    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum CartCommands {
    /// Show cart contents
    List,

    /// Add a product, configuring it first if it is a bundle
    Add {
        /// Product id or name
        product: String,

        #[arg(long = "select", value_parser = parse_selection)]
        selections: Vec<(String, String)>,
    },

    /// Remove a cart line
    Remove {
        /// Line ID (as shown by `cart list`)
        line_id: String,
    },

    /// Empty the cart
    Clear,
}

/// Parse `PATH=OPTION`
pub fn parse_selection(raw: &str) -> Result<(String, String), String> {
    let (path, option) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected PATH=OPTION, got {:?}", raw))?;
    let path = path.trim();
    let option = option.trim();

    if !PATH_REGEX.is_match(path) {
        return Err(format!("invalid slot path {:?} (expected e.g. 0 or 1.0)", path));
    }
    if option.is_empty() {
        return Err(format!("no option given for slot {}", path));
    }
    Ok((path.to_string(), option.to_string()))
}
