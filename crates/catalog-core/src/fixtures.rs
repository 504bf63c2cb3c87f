//! Fixture tables and the sources that supply them.
//!
//! [`Fixtures`] holds the three reference tables. A [`FixtureSource`]
//! produces them; the compiled-in set is available as [`BuiltinFixtures`],
//! and applications may provide their own (e.g. a directory on disk).
//!
//! Parsing is strict about record shape: a missing field, a wrong type or an
//! unknown sex marker fails construction. Dangling foreign keys are accepted
//! here and resolved to `None` by [`crate::resolve`].

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::models::{Category, Product, User};

const BUILTIN_PRODUCTS: &str = include_str!("../fixtures/products.json");
const BUILTIN_CATEGORIES: &str = include_str!("../fixtures/categories.json");
const BUILTIN_USERS: &str = include_str!("../fixtures/users.json");

/// The three reference tables the catalog is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixtures {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub users: Vec<User>,
}

impl Fixtures {
    /// Parse the three tables from JSON arrays.
    pub fn from_json(products: &str, categories: &str, users: &str) -> Result<Self> {
        Ok(Self {
            products: parse_table(products, "products")?,
            categories: parse_table(categories, "categories")?,
            users: parse_table(users, "users")?,
        })
    }
}

fn parse_table<T: DeserializeOwned>(json: &str, table: &str) -> Result<Vec<T>> {
    serde_json::from_str(json).with_context(|| format!("Failed to parse {} fixture", table))
}

/// Anything that can supply the fixture tables.
pub trait FixtureSource {
    /// Short human-readable name, used in logs and stats output.
    fn name(&self) -> &str;

    /// Load and parse all three tables.
    fn load(&self) -> Result<Fixtures>;
}

/// The fixture set compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFixtures;

impl FixtureSource for BuiltinFixtures {
    fn name(&self) -> &str {
        "builtin"
    }

    fn load(&self) -> Result<Fixtures> {
        Fixtures::from_json(BUILTIN_PRODUCTS, BUILTIN_CATEGORIES, BUILTIN_USERS)
    }
}
