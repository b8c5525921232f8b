use std::sync::Once;

use gather_core::{Address, AddressError};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

#[test]
fn parse_accepts_well_formed_http_address() {
    init_logging();
    let address = Address::parse("https://example.com/greek").unwrap();
    assert_eq!(address.as_str(), "https://example.com/greek");
}

#[test]
fn parse_rejects_malformed_input_at_construction() {
    init_logging();
    let err = Address::parse("not a url").unwrap_err();
    assert!(matches!(err, AddressError::Malformed { .. }));
}

#[test]
fn join_segment_appends_one_path_segment() {
    init_logging();
    let base = Address::parse("https://en.wikipedia.org/wiki").unwrap();
    let derived = base.join_segment("Zeus").unwrap();
    assert_eq!(derived.as_str(), "https://en.wikipedia.org/wiki/Zeus");

    // A trailing slash on the base does not double up.
    let base = Address::parse("https://en.wikipedia.org/wiki/").unwrap();
    let derived = base.join_segment("Zeus").unwrap();
    assert_eq!(derived.as_str(), "https://en.wikipedia.org/wiki/Zeus");
}
