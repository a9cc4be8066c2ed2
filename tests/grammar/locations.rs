//! Integration tests for the location table

use wagerline_grammar::{LocationKind, LocationTable, OutsideBet, WheelConfiguration};

#[test]
fn table_sizes() {
    // 12 outside + 102 grid combinations + zero splits + straights
    assert_eq!(LocationTable::build(WheelConfiguration::NO_ZERO).len(), 12 + 102 + 36);
    assert_eq!(LocationTable::build(WheelConfiguration::SINGLE_ZERO).len(), 12 + 102 + 3 + 37);
    assert_eq!(LocationTable::build(WheelConfiguration::DOUBLE_ZERO).len(), 12 + 102 + 4 + 38);
}

#[test]
fn lookup_is_exact() {
    let table = LocationTable::build(WheelConfiguration::default());
    assert!(table.contains("R"));
    assert!(!table.contains("r"));
    assert!(!table.contains(" R"));
    assert!(!table.contains("RED"));
    assert!(table.contains("D3"));
    assert!(!table.contains("D4"));
}

#[test]
fn inside_tokens_follow_the_grid() {
    let table = LocationTable::build(WheelConfiguration::default());
    // Split, street, corner, six line
    for token in ["1-2", "1-4", "1-3", "1-5", "1-6", "31-36", "32-36"] {
        assert!(table.contains(token), "{token} should exist");
    }
    // Not adjacent / wrong orientation
    for token in ["3-4", "2-1", "3-5", "1-7", "34-37"] {
        assert!(!table.contains(token), "{token} should not exist");
    }
}

#[test]
fn zero_splits_depend_on_wheel() {
    let none = LocationTable::build(WheelConfiguration::NO_ZERO);
    let single = LocationTable::build(WheelConfiguration::SINGLE_ZERO);
    let double = LocationTable::build(WheelConfiguration::DOUBLE_ZERO);
    assert!(!none.contains("0-1"));
    assert!(single.contains("0-1") && !single.contains("0-37"));
    assert!(double.contains("0-2") && double.contains("0-37"));
}

#[test]
fn kinds_cover_numbers() {
    let table = LocationTable::build(WheelConfiguration::default());
    assert_eq!(table.get("B"), Some(&LocationKind::Outside(OutsideBet::Black)));
    assert!(table.get("C1").unwrap().covers(34));
    assert!(!table.get("C1").unwrap().covers(0));
    assert!(table.get("1-5").unwrap().covers(4));
    assert!(!table.get("1-5").unwrap().covers(3));
    assert!(table.get("17").unwrap().covers(17));
}
