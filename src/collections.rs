//! Sorting, grouping, searching and pagination over record sequences
//!
//! All helpers are pure: they borrow the input slice and return new
//! collections, leaving the caller's ordering untouched.

use crate::core::record::Record;
use crate::core::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Sort direction for [`sort_by`]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Returns a copy of `items` sorted by the named field.
///
/// The sort is stable, so records with equal keys keep their relative order.
/// Records missing the field sort last in either direction.
pub fn sort_by<T: Record + Clone>(items: &[T], key: &str, order: SortOrder) -> Vec<T> {
    let mut keyed: Vec<(FieldValue, &T)> =
        items.iter().map(|item| (item.field(key), item)).collect();

    keyed.sort_by(|(a, _), (b, _)| match (a.is_unset(), b.is_unset()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match order {
            SortOrder::Asc => a.sort_cmp(b),
            SortOrder::Desc => b.sort_cmp(a),
        },
    });

    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

/// Groups records by the string form of the named field.
///
/// Records keep their encounter order inside each group. Records without the
/// field land in the `""` group.
pub fn group_by<T: Record + Clone>(items: &[T], key: &str) -> BTreeMap<String, Vec<T>> {
    let mut groups: BTreeMap<String, Vec<T>> = BTreeMap::new();
    for item in items {
        groups
            .entry(item.field(key).to_string())
            .or_default()
            .push(item.clone());
    }
    groups
}

/// Case-insensitive substring search across several fields.
///
/// A record matches when any listed field contains the term. A blank term
/// returns every record.
pub fn filter_by_search<T: Record + Clone>(items: &[T], term: &str, keys: &[&str]) -> Vec<T> {
    if term.trim().is_empty() {
        return items.to_vec();
    }

    let needle = term.to_lowercase();

    items
        .iter()
        .filter(|item| {
            keys.iter().any(|key| {
                let value = item.field(key);
                !value.is_unset() && value.to_string().to_lowercase().contains(&needle)
            })
        })
        .cloned()
        .collect()
}

/// One page of a paginated sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Slices out page `page` (1-indexed) of `page_size` items.
///
/// Pages past the end (or page 0) come back empty rather than failing.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let total_pages = if page_size == 0 {
        0
    } else {
        items.len().div_ceil(page_size)
    };

    let slice: &[T] = if page == 0 || page_size == 0 {
        &[]
    } else {
        let start = (page - 1).saturating_mul(page_size).min(items.len());
        let end = start.saturating_add(page_size).min(items.len());
        &items[start..end]
    };

    Page {
        items: slice.to_vec(),
        page,
        total_pages,
        has_next: page < total_pages,
        has_prev: page > 1,
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::{Value, json};

    proptest! {
        #[test]
        fn test_pages_cover_every_item_once(len in 0usize..60, page_size in 1usize..10) {
            let items: Vec<usize> = (0..len).collect();
            let total = paginate(&items, 1, page_size).total_pages;
            let joined: Vec<usize> = (1..=total)
                .flat_map(|p| paginate(&items, p, page_size).items)
                .collect();
            prop_assert_eq!(joined, items);
        }

        #[test]
        fn test_sort_by_orders_keys(values in proptest::collection::vec(-100i64..100, 0..40)) {
            let items: Vec<Value> = values.iter().map(|v| json!({ "k": v })).collect();
            let sorted = sort_by(&items, "k", SortOrder::Asc);
            prop_assert_eq!(sorted.len(), items.len());
            let keys: Vec<i64> = sorted.iter().map(|r| r["k"].as_i64().unwrap()).collect();
            prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
