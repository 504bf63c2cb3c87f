//! Join resolver: product → category → owning user.
//!
//! Each product is joined with the first category whose id equals its
//! `category_id`, then with the first user whose id equals that category's
//! `owner_id`. Missing references resolve to `None` and never fail.
//!
//! Lookups go through id indexes built once per call, so resolving `n`
//! products against `c` categories and `u` users is `O(n + c + u)`.

use std::collections::HashMap;

use crate::models::{Category, EnrichedProduct, Product, User};

/// Join every product with its category and the category's owner.
///
/// Output order matches `products` exactly. Inputs are not modified.
pub fn resolve(
    products: &[Product],
    categories: &[Category],
    users: &[User],
) -> Vec<EnrichedProduct> {
    let categories_by_id = index_first(categories, |c| c.id);
    let users_by_id = index_first(users, |u| u.id);

    products
        .iter()
        .map(|product| {
            let category = categories_by_id.get(&product.category_id).copied();
            // No category means no owner id to look up.
            let user = category.and_then(|c| users_by_id.get(&c.owner_id).copied());

            EnrichedProduct {
                id: product.id,
                name: product.name.clone(),
                category_id: product.category_id,
                category: category.cloned(),
                user_name: user.map(|u| u.name.clone()),
                user_sex: user.map(|u| u.sex),
            }
        })
        .collect()
}

/// Index records by id, keeping the earliest record for duplicate ids.
fn index_first<T>(records: &[T], id: impl Fn(&T) -> i64) -> HashMap<i64, &T> {
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        index.entry(id(record)).or_insert(record);
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sex;

    fn product(id: i64, name: &str, category_id: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            category_id,
        }
    }

    fn category(id: i64, title: &str, owner_id: i64) -> Category {
        Category {
            id,
            title: title.to_string(),
            icon: "🍶".to_string(),
            owner_id,
        }
    }

    fn user(id: i64, name: &str, sex: Sex) -> User {
        User {
            id,
            name: name.to_string(),
            sex,
        }
    }

    #[test]
    fn resolves_full_chain() {
        let rows = resolve(
            &[product(1, "Milk", 10)],
            &[category(10, "Drinks", 100)],
            &[user(100, "Max", Sex::Male)],
        );
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.id, 1);
        assert_eq!(row.name, "Milk");
        assert_eq!(row.category_id, 10);
        assert_eq!(row.category.as_ref().map(|c| c.title.as_str()), Some("Drinks"));
        assert_eq!(row.user_name.as_deref(), Some("Max"));
        assert_eq!(row.user_sex, Some(Sex::Male));
    }

    #[test]
    fn missing_category_nulls_everything() {
        let rows = resolve(
            &[product(1, "Milk", 99)],
            &[category(10, "Drinks", 100)],
            &[user(100, "Max", Sex::Male)],
        );
        assert_eq!(rows[0].category, None);
        assert_eq!(rows[0].user_name, None);
        assert_eq!(rows[0].user_sex, None);
    }

    #[test]
    fn missing_owner_keeps_category() {
        let drinks = category(10, "Drinks", 404);
        let rows = resolve(
            &[product(1, "Milk", 10)],
            &[drinks.clone()],
            &[user(100, "Max", Sex::Male)],
        );
        assert_eq!(rows[0].category, Some(drinks));
        assert_eq!(rows[0].user_name, None);
        assert_eq!(rows[0].user_sex, None);
    }

    #[test]
    fn first_match_wins_on_duplicate_ids() {
        let rows = resolve(
            &[product(1, "Milk", 10)],
            &[category(10, "Drinks", 100), category(10, "Shadowed", 200)],
            &[
                user(100, "Anna", Sex::Female),
                user(100, "Shadowed", Sex::Male),
                user(200, "Roma", Sex::Male),
            ],
        );
        assert_eq!(rows[0].category.as_ref().unwrap().title, "Drinks");
        assert_eq!(rows[0].user_name.as_deref(), Some("Anna"));
        assert_eq!(rows[0].user_sex, Some(Sex::Female));
    }

    #[test]
    fn preserves_input_order() {
        let products = vec![product(3, "C", 1), product(1, "A", 2), product(2, "B", 1)];
        let rows = resolve(&products, &[category(1, "One", 1)], &[user(1, "U", Sex::Male)]);
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert!(rows[1].category.is_none());
    }

    #[test]
    fn empty_inputs() {
        assert!(resolve(&[], &[], &[]).is_empty());
        let rows = resolve(&[product(1, "Milk", 10)], &[], &[]);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].category.is_none());
    }
}
