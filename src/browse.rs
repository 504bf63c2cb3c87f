//! `catalog browse`: interactive filtering.
//!
//! Every input line replaces the current query, and the full catalog is
//! re-filtered and re-rendered before the next line is read. Lines are used
//! verbatim apart from the line terminator, so leading or trailing spaces
//! are part of the query. Bytes that are not valid UTF-8 are replaced with
//! U+FFFD rather than ending the session. An empty line clears the query; `:q` or EOF ends
//! the session.

use anyhow::Result;
use catalog_core::catalog::Catalog;
use std::borrow::Cow;
use std::io::{BufRead, Write};

use crate::config::Config;
use crate::fixtures::load_catalog;
use crate::render::{write_table, RenderOptions};
use crate::search::search_products;

const PROMPT: &str = "search> ";
const QUIT: &str = ":q";

pub fn run_browse(config: &Config) -> Result<()> {
    let catalog = load_catalog(config)?;
    let opts = RenderOptions::from_config(config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    browse(&catalog, stdin.lock(), &mut stdout.lock(), &opts)
}

/// Drive a browse session over arbitrary input and output streams.
pub fn browse<R: BufRead, W: Write>(
    catalog: &Catalog,
    mut input: R,
    out: &mut W,
    opts: &RenderOptions,
) -> Result<()> {
    write_table(out, catalog.products(), opts)?;

    let mut buf = Vec::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out)?;
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            tracing::warn!("query line is not valid UTF-8; invalid bytes replaced");
        }
        let query = strip_line_ending(&line);
        if query == QUIT {
            break;
        }

        let rows = search_products(catalog, query);
        write_table(out, &rows, opts)?;
    }
    Ok(())
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::fixtures::Fixtures;

    fn catalog() -> Catalog {
        let fixtures = Fixtures::from_json(
            r#"[
                {"id":1,"name":"Milk","categoryId":10},
                {"id":2,"name":"Bread","categoryId":10},
                {"id":3,"name":"Ice cream","categoryId":10}
            ]"#,
            r#"[{"id":10,"title":"Grocery","icon":"🍞","ownerId":100}]"#,
            r#"[{"id":100,"name":"Anna","sex":"f"}]"#,
        )
        .unwrap();
        Catalog::build(&fixtures)
    }

    fn run(input: &str) -> String {
        run_bytes(input.as_bytes())
    }

    fn run_bytes(input: &[u8]) -> String {
        let opts = RenderOptions {
            color: false,
            no_results_message: "No products matching selected criteria".to_string(),
        };
        let mut out = Vec::new();
        browse(&catalog(), input, &mut out, &opts).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn strips_only_line_endings() {
        assert_eq!(strip_line_ending("milk\n"), "milk");
        assert_eq!(strip_line_ending("milk\r\n"), "milk");
        assert_eq!(strip_line_ending(" milk \n"), " milk ");
        assert_eq!(strip_line_ending("milk"), "milk");
    }

    #[test]
    fn each_line_refilters() {
        let out = run("mi\nxyz\n:q\n");
        let sections: Vec<&str> = out.split(PROMPT).collect();
        // Initial table, one section per query, and the trailing `:q` prompt.
        assert_eq!(sections.len(), 4);
        assert!(sections[0].contains("Bread"));
        assert!(sections[1].contains("Milk"));
        assert!(!sections[1].contains("Bread"));
        assert!(sections[2].contains("No products matching selected criteria"));
        assert_eq!(sections[3], "");
    }

    #[test]
    fn empty_line_clears_query() {
        let out = run("bread\n\n");
        let sections: Vec<&str> = out.split(PROMPT).collect();
        assert!(!sections[1].contains("Milk"));
        assert!(sections[2].contains("Milk"));
        assert!(sections[2].contains("Ice cream"));
    }

    #[test]
    fn whitespace_query_is_literal() {
        let out = run(" \n");
        let sections: Vec<&str> = out.split(PROMPT).collect();
        assert!(sections[1].contains("Ice cream"));
        assert!(!sections[1].contains("Milk"));
    }

    #[test]
    fn invalid_utf8_line_does_not_end_session() {
        let out = run_bytes(b"mi\xff\nbread\n");
        let sections: Vec<&str> = out.split(PROMPT).collect();
        assert_eq!(sections.len(), 4);
        assert!(sections[1].contains("No products matching selected criteria"));
        assert!(sections[2].contains("Bread"));
        assert!(!sections[2].contains("Milk"));
    }
}
