//! Core data models for the product catalog.
//!
//! [`Product`], [`Category`] and [`User`] mirror the fixture tables and use
//! the fixtures' camelCase keys on the wire. [`EnrichedProduct`] is the
//! derived row produced by the join resolver.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A catalog product. References its category by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
}

/// A product category, owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub title: String,
    pub icon: String,
    pub owner_id: i64,
}

/// Sex marker of a user, serialized as `"m"` / `"f"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "m",
            Sex::Female => "f",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user who may own categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub sex: Sex,
}

/// A product joined with its category and the category owner's display
/// attributes.
///
/// `category` is `None` when no category matches `category_id`. The user
/// fields are `None` when the category is missing or its owner is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedProduct {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub category: Option<Category>,
    pub user_name: Option<String>,
    pub user_sex: Option<Sex>,
}
