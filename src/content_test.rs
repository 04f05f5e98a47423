use super::*;

use crate::state::experience::{DateRange, build_entries};

#[test]
fn every_authored_label_parses_cleanly() {
    for item in experience_items() {
        let range = DateRange::parse(&item.dates_label);
        assert!(
            range.start.is_some() && range.end.is_some(),
            "label {:?} for {} did not parse",
            item.dates_label,
            item.organization
        );
    }
}

#[test]
fn exactly_one_engagement_is_ongoing() {
    let ongoing = build_entries(experience_items())
        .iter()
        .filter(|e| e.range.ongoing)
        .count();
    assert_eq!(ongoing, 1);
}

#[test]
fn authored_cards_have_display_text() {
    for item in experience_items() {
        assert!(!item.role.is_empty());
        assert!(!item.organization.is_empty());
        assert!(!item.dates_label.is_empty());
    }
}
