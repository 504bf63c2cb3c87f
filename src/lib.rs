//! # Product Catalog
//!
//! Browse a static product catalog joined with each product's category and
//! the category's owner, narrowed by a free-text query over product name or
//! id.
//!
//! The join and filter logic lives in the I/O-free `catalog-core` crate;
//! this crate adds configuration, fixture loading, terminal rendering, and
//! the `catalog` CLI.
//!
//! ```text
//! ┌────────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐
//! │  Fixtures  │──▶│ resolve  │──▶│ Catalog  │──▶│  filter  │──▶ table / JSON
//! │ builtin/dir│   │ (once)   │   │ (shared) │   │(per query)│
//! └────────────┘   └──────────┘   └──────────┘   └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! catalog search              # every product
//! catalog search mi           # name or id containing "mi"
//! catalog get 1 --json        # one enriched product
//! catalog browse              # re-filter on every input line
//! catalog stats               # table sizes and unresolved references
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`fixtures`] | Fixture source selection and catalog construction |
//! | [`render`] | Table and JSON output |
//! | [`search`] | One-shot filtering |
//! | [`browse`] | Interactive filtering loop |
//! | [`get`] | Single product lookup |
//! | [`stats`] | Catalog summary |
//! | [`export`] | Fixture export |
//! | [`logging`] | Tracing subscriber setup |

pub mod browse;
pub mod config;
pub mod export;
pub mod fixtures;
pub mod get;
pub mod logging;
pub mod render;
pub mod search;
pub mod stats;
