//! Tracing setup for the `catalog` binary.
//!
//! Events go to stderr so stdout stays parseable. The filter is read from
//! `CATALOG_LOG` (same syntax as `RUST_LOG`); without it only warnings are
//! shown, or debug output for this crate under `--verbose`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "CATALOG_LOG";

pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "product_catalog=debug,catalog=debug,catalog_core=warn,warn"
    } else {
        "warn"
    }
}

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
