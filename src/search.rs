//! Menu Search
//!
//! Filtered view over the collection; never touches the source.

use crate::models::MenuItem;

/// Items whose name contains `query`, case-insensitively, in source order.
/// A blank query yields the whole collection.
pub fn project<'a>(items: &'a [MenuItem], query: &str) -> Vec<&'a MenuItem> {
    if query.trim().is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_item(id: &str, name: &str) -> MenuItem {
        MenuItem {
            id: Some(id.to_string()),
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn menu() -> Vec<MenuItem> {
        vec![
            make_item("1", "Latte"),
            make_item("2", "Mocha"),
            make_item("3", "Iced Latte"),
            make_item("4", "Flat White"),
        ]
    }

    fn ids(items: &[&MenuItem]) -> Vec<String> {
        items.iter().filter_map(|item| item.id.clone()).collect()
    }

    #[test]
    fn test_blank_query_returns_everything_in_order() {
        let items = menu();
        assert_eq!(ids(&project(&items, "")), vec!["1", "2", "3", "4"]);
        assert_eq!(ids(&project(&items, "   ")), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_case_insensitive_stable_filter() {
        let items = menu();
        assert_eq!(ids(&project(&items, "LAT")), vec!["1", "3", "4"]);
        assert_eq!(ids(&project(&items, "mOCHA")), vec!["2"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(project(&menu(), "espresso").is_empty());
    }

    #[test]
    fn test_every_match_kept_and_source_untouched() {
        let items = menu();
        let before = items.clone();
        for query in ["a", "te", "x", "e W"] {
            let result = project(&items, query);
            let expected: Vec<&MenuItem> = items
                .iter()
                .filter(|item| item.name.to_lowercase().contains(&query.to_lowercase()))
                .collect();
            assert_eq!(result, expected);
        }
        assert_eq!(items, before);
    }

    fn arb_menu() -> impl Strategy<Value = Vec<MenuItem>> {
        prop::collection::vec("[A-Za-z ]{0,12}", 0..16).prop_map(|names| {
            names
                .iter()
                .enumerate()
                .map(|(i, name)| make_item(&i.to_string(), name))
                .collect()
        })
    }

    /// Source positions of `result`, located by address
    fn positions(items: &[MenuItem], result: &[&MenuItem]) -> Vec<usize> {
        result
            .iter()
            .filter_map(|found| items.iter().position(|item| std::ptr::eq(item, *found)))
            .collect()
    }

    proptest! {
        #[test]
        fn prop_blank_query_is_identity(items in arb_menu(), blank in " {0,4}") {
            let result = project(&items, &blank);
            prop_assert_eq!(positions(&items, &result), (0..items.len()).collect::<Vec<_>>());
        }

        #[test]
        fn prop_matches_complete_ordered_unique(items in arb_menu(), query in "[A-Za-z]{1,3}") {
            let before = items.clone();
            let result = project(&items, &query);
            let needle = query.to_lowercase();

            let expected: Vec<usize> = items
                .iter()
                .enumerate()
                .filter(|(_, item)| item.name.to_lowercase().contains(&needle))
                .map(|(i, _)| i)
                .collect();

            // strictly increasing source positions: ordered, no duplicates
            let found = positions(&items, &result);
            prop_assert_eq!(found.len(), result.len());
            prop_assert!(found.windows(2).all(|pair| pair[0] < pair[1]));
            prop_assert_eq!(found, expected);
            prop_assert_eq!(items, before);
        }
    }
}
