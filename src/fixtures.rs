//! Fixture loading for the CLI.
//!
//! Chooses between the compiled-in fixtures and a directory configured in
//! `[fixtures] dir`, then builds the [`Catalog`].

use anyhow::{Context, Result};
use catalog_core::catalog::Catalog;
use catalog_core::fixtures::{BuiltinFixtures, FixtureSource, Fixtures};
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Fixtures read from `products.json`, `categories.json` and `users.json`
/// inside a directory.
#[derive(Debug, Clone)]
pub struct DirFixtures {
    root: PathBuf,
    name: String,
}

impl DirFixtures {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let name = format!("dir:{}", root.display());
        Self { root, name }
    }

    fn read(&self, file: &str) -> Result<String> {
        let path = self.root.join(file);
        std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read fixture file: {}", path.display()))
    }
}

impl FixtureSource for DirFixtures {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Fixtures> {
        let products = self.read("products.json")?;
        let categories = self.read("categories.json")?;
        let users = self.read("users.json")?;
        Fixtures::from_json(&products, &categories, &users)
            .with_context(|| format!("Invalid fixtures in {}", self.root.display()))
    }
}

/// The fixture source selected by `config`.
pub fn source_for(config: &Config) -> Box<dyn FixtureSource> {
    match &config.fixtures.dir {
        Some(dir) => Box::new(DirFixtures::new(dir.as_path())),
        None => Box::new(BuiltinFixtures),
    }
}

/// Load fixtures from the configured source and resolve them.
pub fn load_catalog(config: &Config) -> Result<Catalog> {
    let source = source_for(config);
    let fixtures = source.load()?;
    let catalog = Catalog::build(&fixtures);

    let summary = catalog.summary();
    tracing::debug!(
        source = source.name(),
        products = summary.products,
        categories = summary.categories,
        users = summary.users,
        "catalog built"
    );
    if summary.missing_category > 0 || summary.missing_owner > 0 {
        tracing::warn!(
            source = source.name(),
            missing_category = summary.missing_category,
            missing_owner = summary.missing_owner,
            "fixtures contain unresolved references"
        );
    }

    Ok(catalog)
}

/// Write a fixture set into `dir` in the on-disk layout [`DirFixtures`] reads.
pub fn write_fixture_dir(dir: &Path, fixtures: &Fixtures) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create fixture dir: {}", dir.display()))?;
    write_json(&dir.join("products.json"), &fixtures.products)?;
    write_json(&dir.join("categories.json"), &fixtures.categories)?;
    write_json(&dir.join("users.json"), &fixtures.users)?;
    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}
