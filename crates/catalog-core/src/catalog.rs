//! The enriched catalog: built once, read many times.
//!
//! [`Catalog`] owns the output of the join resolver and is the value handed
//! to every query. It is never mutated after [`Catalog::build`].

use serde::Serialize;

use crate::filter;
use crate::fixtures::Fixtures;
use crate::models::EnrichedProduct;
use crate::resolve::resolve;

/// Immutable, fully resolved product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<EnrichedProduct>,
    category_count: usize,
    user_count: usize,
}

/// Counts describing a built catalog, including unresolved references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub products: usize,
    pub categories: usize,
    pub users: usize,
    /// Products whose `category_id` matched no category.
    pub missing_category: usize,
    /// Products with a category whose owner matched no user.
    pub missing_owner: usize,
}

impl Catalog {
    /// Resolve all fixture products into enriched rows.
    pub fn build(fixtures: &Fixtures) -> Self {
        Self {
            products: resolve(&fixtures.products, &fixtures.categories, &fixtures.users),
            category_count: fixtures.categories.len(),
            user_count: fixtures.users.len(),
        }
    }

    /// All enriched rows, in fixture order.
    pub fn products(&self) -> &[EnrichedProduct] {
        &self.products
    }

    /// Rows matching `query`. See [`filter::filter`].
    pub fn filter(&self, query: &str) -> Vec<EnrichedProduct> {
        filter::filter(&self.products, query)
    }

    /// The first row with the given product id.
    pub fn get(&self, id: i64) -> Option<&EnrichedProduct> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn summary(&self) -> CatalogSummary {
        let missing_category = self.products.iter().filter(|p| p.category.is_none()).count();
        let missing_owner = self
            .products
            .iter()
            .filter(|p| p.category.is_some() && p.user_name.is_none())
            .count();

        CatalogSummary {
            products: self.products.len(),
            categories: self.category_count,
            users: self.user_count,
            missing_category,
            missing_owner,
        }
    }
}
