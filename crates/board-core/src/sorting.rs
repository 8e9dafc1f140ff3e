//! Sort Engine
//!
//! Orders the tickets of one column. Sorting never touches the input.

use std::cmp::Ordering;

use crate::mode::OrderingMode;
use crate::models::Ticket;

/// Alphabetical title order: case-folded first, then lowercase before
/// uppercase at the first letter whose case differs.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded
        .then_with(|| a.chars().map(char::is_uppercase).cmp(b.chars().map(char::is_uppercase)))
        .then_with(|| a.cmp(b))
}

/// Return a sorted copy of `tickets`. Ties keep their input order.
pub fn sort_tickets(tickets: &[Ticket], ordering: OrderingMode) -> Vec<Ticket> {
    let mut sorted = tickets.to_vec();
    match ordering {
        OrderingMode::Priority => sorted.sort_by(|a, b| b.priority.cmp(&a.priority)),
        OrderingMode::Title => sorted.sort_by(|a, b| compare_titles(&a.title, &b.title)),
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{arb_tickets, titled};
    use proptest::prelude::*;

    fn titles(tickets: &[Ticket]) -> Vec<&str> {
        tickets.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_priority_descending() {
        let tickets = vec![titled(1, "a", 1), titled(2, "b", 4), titled(3, "c", 0), titled(4, "d", 3)];
        let sorted = sort_tickets(&tickets, OrderingMode::Priority);
        let levels: Vec<i64> = sorted.iter().map(|t| t.priority).collect();
        assert_eq!(levels, vec![4, 3, 1, 0]);
    }

    #[test]
    fn test_priority_ties_keep_input_order() {
        let tickets = vec![titled(1, "first", 2), titled(2, "second", 2), titled(3, "top", 4)];
        let sorted = sort_tickets(&tickets, OrderingMode::Priority);
        assert_eq!(titles(&sorted), vec!["top", "first", "second"]);
    }

    #[test]
    fn test_title_ascending() {
        let tickets = vec![
            titled(1, "Update user profile", 0),
            titled(2, "add dark mode", 0),
            titled(3, "Add Dark mode", 0),
            titled(4, "Bug fix", 0),
        ];
        let sorted = sort_tickets(&tickets, OrderingMode::Title);
        assert_eq!(
            titles(&sorted),
            vec!["add dark mode", "Add Dark mode", "Bug fix", "Update user profile"]
        );
    }

    #[test]
    fn test_input_untouched() {
        let tickets = vec![titled(1, "b", 0), titled(2, "a", 4)];
        let before = tickets.clone();
        let _ = sort_tickets(&tickets, OrderingMode::Title);
        let _ = sort_tickets(&tickets, OrderingMode::Priority);
        assert_eq!(tickets, before);
    }

    #[test]
    fn test_compare_titles() {
        assert_eq!(compare_titles("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_titles("Zebra", "apple"), Ordering::Greater);
        assert_eq!(compare_titles("same", "same"), Ordering::Equal);
        assert_eq!(compare_titles("", "a"), Ordering::Less);
    }

    #[test]
    fn test_lowercase_sorts_before_uppercase() {
        assert_eq!(compare_titles("a", "A"), Ordering::Less);
        assert_eq!(compare_titles("Add Dark mode", "add dark mode"), Ordering::Greater);
        assert_eq!(compare_titles("add Dark", "add dark"), Ordering::Greater);
        assert_eq!(compare_titles("b", "A"), Ordering::Greater);
    }

    proptest! {
        #[test]
        fn prop_priority_sort_is_monotonic(tickets in arb_tickets()) {
            let sorted = sort_tickets(&tickets, OrderingMode::Priority);
            prop_assert_eq!(sorted.len(), tickets.len());
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].priority >= pair[1].priority);
            }
        }

        #[test]
        fn prop_title_sort_is_ordered_permutation(tickets in arb_tickets()) {
            let sorted = sort_tickets(&tickets, OrderingMode::Title);
            for pair in sorted.windows(2) {
                prop_assert_ne!(compare_titles(&pair[0].title, &pair[1].title), Ordering::Greater);
            }
            let mut input_ids: Vec<_> = tickets.iter().map(|t| t.id.clone()).collect();
            let mut output_ids: Vec<_> = sorted.iter().map(|t| t.id.clone()).collect();
            input_ids.sort();
            output_ids.sort();
            prop_assert_eq!(input_ids, output_ids);
        }
    }
}
