//! # Catalog Core
//!
//! Shared, I/O-free logic for the product catalog: data models, fixture
//! parsing, the join resolver, and the filter engine.
//!
//! This crate contains no filesystem access, logging, or terminal code.
//! The built-in fixtures are compiled in with `include_str!`.
//!
//! ```text
//! fixtures ──▶ resolve() ──▶ Catalog ──▶ filter(query) ──▶ rows
//! ```

pub mod catalog;
pub mod filter;
pub mod fixtures;
pub mod models;
pub mod resolve;
