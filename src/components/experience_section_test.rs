use super::*;

use crate::state::experience::compare_entries;
use std::cmp::Ordering;

#[test]
fn ordered_entries_covers_all_authored_cards() {
    assert_eq!(ordered_entries().len(), content::experience_items().len());
}

#[test]
fn ordered_entries_lead_with_the_ongoing_engagement() {
    let entries = ordered_entries();
    assert!(entries[0].range.ongoing, "ongoing card must sort first");
}

#[test]
fn ordered_entries_are_sorted_by_the_display_comparator() {
    let entries = ordered_entries();
    for pair in entries.windows(2) {
        assert_ne!(compare_entries(&pair[0], &pair[1]), Ordering::Greater);
    }
}

#[test]
fn ordering_is_stable_across_rebuilds() {
    assert_eq!(ordered_entries(), ordered_entries());
}
