//! `catalog search`: filter the catalog once and print the result.

use anyhow::Result;
use catalog_core::catalog::Catalog;
use catalog_core::models::EnrichedProduct;

use crate::config::Config;
use crate::fixtures::load_catalog;
use crate::render::{write_json, write_table, RenderOptions};

/// Core search function returning structured rows (used by CLI and browse).
pub fn search_products(catalog: &Catalog, query: &str) -> Vec<EnrichedProduct> {
    let rows = catalog.filter(query);
    tracing::debug!(
        query,
        matched = rows.len(),
        total = catalog.products().len(),
        "filtered"
    );
    rows
}

pub fn run_search(config: &Config, query: &str, json: bool) -> Result<()> {
    let catalog = load_catalog(config)?;
    let rows = search_products(&catalog, query);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        write_json(&mut out, &rows)
    } else {
        write_table(&mut out, &rows, &RenderOptions::from_config(config))
    }
}
