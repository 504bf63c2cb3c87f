//! Catalog statistics.
//!
//! A quick summary of what was loaded: table sizes and how many products
//! could not be fully resolved. Used by `catalog stats` to sanity-check a
//! custom fixture directory.

use anyhow::Result;
use catalog_core::catalog::CatalogSummary;

use crate::config::Config;
use crate::fixtures::{load_catalog, source_for};
use crate::render::write_json;

pub fn run_stats(config: &Config, json: bool) -> Result<()> {
    let catalog = load_catalog(config)?;
    let summary = catalog.summary();

    if json {
        return write_json(&mut std::io::stdout().lock(), &summary);
    }

    print!("{}", format_summary(source_for(config).name(), &summary));
    Ok(())
}

fn format_summary(source: &str, s: &CatalogSummary) -> String {
    let mut out = String::new();
    out.push_str("Product Catalog Stats\n");
    out.push_str("=====================\n\n");
    out.push_str(&format!("  Fixtures:          {}\n\n", source));
    out.push_str(&format!("  Products:          {}\n", s.products));
    out.push_str(&format!("  Categories:        {}\n", s.categories));
    out.push_str(&format!("  Users:             {}\n\n", s.users));
    out.push_str(&format!(
        "  Resolved:          {} / {} ({}%)\n",
        resolved(s),
        s.products,
        percent(resolved(s), s.products)
    ));
    out.push_str(&format!("  Missing category:  {}\n", s.missing_category));
    out.push_str(&format!("  Missing owner:     {}\n", s.missing_owner));
    out
}

fn resolved(s: &CatalogSummary) -> usize {
    s.products - s.missing_category - s.missing_owner
}

fn percent(n: usize, total: usize) -> usize {
    if total > 0 {
        (n * 100) / total
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_handles_empty() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(4, 4), 100);
    }

    #[test]
    fn summary_lists_unresolved_counts() {
        let s = CatalogSummary {
            products: 4,
            categories: 2,
            users: 1,
            missing_category: 1,
            missing_owner: 1,
        };
        let text = format_summary("builtin", &s);
        assert!(text.contains("Fixtures:          builtin"));
        assert!(text.contains("Resolved:          2 / 4 (50%)"));
        assert!(text.contains("Missing category:  1"));
        assert!(text.contains("Missing owner:     1"));
    }
}
