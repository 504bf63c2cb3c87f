//! Export the active fixture set to a directory.
//!
//! Writes `products.json`, `categories.json` and `users.json` in the layout
//! `[fixtures] dir` expects, giving a starting point for custom fixtures.

use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::fixtures::{source_for, write_fixture_dir};

pub fn run_export(config: &Config, dir: &Path) -> Result<()> {
    let source = source_for(config);
    let fixtures = source.load()?;
    write_fixture_dir(dir, &fixtures)?;

    tracing::info!(source = source.name(), dir = %dir.display(), "fixtures exported");
    println!(
        "Exported {} products, {} categories, {} users to {}",
        fixtures.products.len(),
        fixtures.categories.len(),
        fixtures.users.len(),
        dir.display()
    );
    Ok(())
}
