//! Filter engine: narrows enriched rows by a free-text query.
//!
//! A row matches when its lower-cased name contains the lower-cased query,
//! or when its decimal id contains the query verbatim. The query is used
//! as-is: whitespace is not trimmed and an empty query matches every row.
//!
//! Every call scans the full input, so cost is linear in the number of rows.

use crate::models::EnrichedProduct;

/// Whether a single row matches `query`.
pub fn matches(row: &EnrichedProduct, query: &str) -> bool {
    row_matches(row, query, &query.to_lowercase())
}

/// Return the rows matching `query`, in input order.
pub fn filter(rows: &[EnrichedProduct], query: &str) -> Vec<EnrichedProduct> {
    let needle = query.to_lowercase();
    rows.iter()
        .filter(|row| row_matches(row, query, &needle))
        .cloned()
        .collect()
}

// `needle` is `query` lower-cased; ids are digits, so they compare against
// the raw query.
fn row_matches(row: &EnrichedProduct, query: &str, needle: &str) -> bool {
    row.name.to_lowercase().contains(needle) || row.id.to_string().contains(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, name: &str) -> EnrichedProduct {
        EnrichedProduct {
            id,
            name: name.to_string(),
            category_id: 1,
            category: None,
            user_name: None,
            user_sex: None,
        }
    }

    fn ids(rows: &[EnrichedProduct]) -> Vec<i64> {
        rows.iter().map(|r| r.id).collect()
    }

    fn sample() -> Vec<EnrichedProduct> {
        vec![
            row(1, "Milk"),
            row(2, "abacus"),
            row(12, "Orange juice"),
            row(21, "Ice cream"),
            row(3, "Mint"),
        ]
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let rows = sample();
        assert_eq!(filter(&rows, ""), rows);
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let rows = sample();
        assert_eq!(ids(&filter(&rows, "AB")), vec![2]);
        assert_eq!(ids(&filter(&rows, "mI")), vec![1, 3]);
    }

    #[test]
    fn id_match_is_literal_substring() {
        let rows = sample();
        assert_eq!(ids(&filter(&rows, "1")), vec![1, 12, 21]);
        assert_eq!(ids(&filter(&rows, "21")), vec![21]);
    }

    #[test]
    fn name_or_id_either_matches() {
        let rows = vec![row(3, "Item 7"), row(7, "Other"), row(8, "none")];
        assert_eq!(ids(&filter(&rows, "7")), vec![3, 7]);
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let rows = sample();
        assert_eq!(ids(&filter(&rows, " ")), vec![12, 21]);
        assert!(filter(&rows, " milk").is_empty());
    }

    #[test]
    fn no_match_is_empty() {
        assert!(filter(&sample(), "xyz").is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let rows = sample();
        for q in ["", "m", "1", "CREAM", " ", "zz"] {
            let once = filter(&rows, q);
            assert_eq!(filter(&once, q), once, "query {:?}", q);
        }
    }

    #[test]
    fn matches_agrees_with_filter() {
        let rows = sample();
        for q in ["", "m", "1", "JUICE"] {
            let expected: Vec<i64> = rows.iter().filter(|r| matches(r, q)).map(|r| r.id).collect();
            assert_eq!(ids(&filter(&rows, q)), expected);
        }
    }

    #[test]
    fn input_is_untouched() {
        let rows = sample();
        let before = rows.clone();
        let _ = filter(&rows, "m");
        assert_eq!(rows, before);
    }
}
