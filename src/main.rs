//! # Product Catalog CLI (`catalog`)
//!
//! Browse the product catalog from the terminal.
//!
//! ## Usage
//!
//! ```bash
//! catalog --config ./config/catalog.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `catalog search [query]` | Print products whose name or id contains the query |
//! | `catalog get <id>` | Print a single product with its category and owner |
//! | `catalog browse` | Interactive search: every input line re-filters the table |
//! | `catalog stats` | Show table sizes and unresolved references |
//! | `catalog export <dir>` | Write the active fixtures as JSON files |
//!
//! ## Examples
//!
//! ```bash
//! # Every product
//! catalog search
//!
//! # Case-insensitive name match, or literal id match
//! catalog search MI
//! catalog search 1 --json
//!
//! # Use a custom fixture directory
//! catalog export ./fixtures
//! catalog --config ./config/catalog.toml stats
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use product_catalog::{browse, config, export, get, logging, search, stats};

const DEFAULT_CONFIG: &str = "./config/catalog.toml";

/// Product catalog CLI: browse products joined with their category and
/// owner, filtered by a free-text query.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/catalog.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "catalog",
    about = "Product catalog: browse products joined with their category and owner",
    version,
    long_about = "Joins every product with its category and the category's owner, and \
    narrows the list by a case-insensitive name match or a literal id match."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/catalog.toml`. When the default file does not
    /// exist, built-in fixtures and default display settings are used.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr (overridden by `CATALOG_LOG`).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Print products matching a query.
    ///
    /// A product matches when its name contains the query (ignoring case)
    /// or its id contains the query. The query is not trimmed. With no
    /// query every product is printed.
    Search {
        /// Substring to look for in product names and ids.
        #[arg(default_value = "")]
        query: String,

        /// Print rows as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Print one product by id.
    Get {
        /// Product id.
        id: i64,

        /// Print the product as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Interactive search.
    ///
    /// Reads one query per line from stdin and reprints the matching
    /// products after each line. An empty line shows everything again;
    /// `:q` or end of input exits.
    Browse,

    /// Show fixture table sizes and unresolved references.
    Stats {
        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Write the active fixture set to a directory.
    ///
    /// Produces `products.json`, `categories.json` and `users.json`, usable
    /// as `[fixtures] dir`.
    Export {
        /// Target directory (created if missing).
        dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let cfg = match &cli.config {
        Some(path) => config::load_or_minimal(path, false)?,
        None => config::load_or_minimal(&PathBuf::from(DEFAULT_CONFIG), true)?,
    };
    tracing::debug!(config = ?cli.config, fixtures_dir = ?cfg.fixtures.dir, "config loaded");

    match cli.command {
        Commands::Search { query, json } => {
            search::run_search(&cfg, &query, json)?;
        }
        Commands::Get { id, json } => {
            get::run_get(&cfg, id, json)?;
        }
        Commands::Browse => {
            browse::run_browse(&cfg)?;
        }
        Commands::Stats { json } => {
            stats::run_stats(&cfg, json)?;
        }
        Commands::Export { dir } => {
            export::run_export(&cfg, &dir)?;
        }
    }

    Ok(())
}
