use std::sync::Once;

use gather_core::{encode, first_letter_matches, sum_matching};
use num_bigint::BigUint;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

#[test]
fn filter_is_case_insensitive_on_first_letter_only() {
    init_logging();
    assert!(first_letter_matches("Neptun", 'n'));
    assert!(first_letter_matches("neptun", 'N'));
    assert!(!first_letter_matches("Zeus", 'n'));
    // Only the first character is inspected.
    assert!(!first_letter_matches("Athena", 'n'));
}

#[test]
fn empty_item_never_matches() {
    init_logging();
    assert!(!first_letter_matches("", 'n'));
}

#[test]
fn sum_matches_known_scenario() {
    init_logging();
    let items = [
        "Zeus", "Hera", "Nike", // greek
        "Neptun", "Mars", // roman
        "Njord", "Thor", // nordic
    ];
    let expected: BigUint = "78179296332338311".parse().unwrap();
    assert_eq!(sum_matching(items, 'n'), expected);
}

#[test]
fn sum_is_order_independent() {
    init_logging();
    let forward = ["Nike", "Neptun", "Njord", "Zeus"];
    let shuffled = ["Zeus", "Njord", "Nike", "Neptun"];
    assert_eq!(sum_matching(forward, 'n'), sum_matching(shuffled, 'n'));
}

#[test]
fn zero_survivors_yield_zero() {
    init_logging();
    let items: [&str; 3] = ["Zeus", "Hera", ""];
    assert_eq!(sum_matching(items, 'n'), BigUint::from(0u32));
    assert_eq!(sum_matching(Vec::<String>::new(), 'n'), BigUint::from(0u32));
}

#[test]
fn single_survivor_equals_its_encoding() {
    init_logging();
    assert_eq!(sum_matching(["Nike"], 'n'), encode("Nike"));
}
