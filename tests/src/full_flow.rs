//! End-to-end: classify -> dispatch -> assemble panels -> render.

use webcheck_common::address::{classify, AddressError, AddressKind};
use webcheck_core::dispatch::route_for;
use webcheck_core::panels::panels_for;

#[test]
fn test_url_input_renders_full_view() {
    let classification = classify("example.com");
    assert_eq!(classification.kind, AddressKind::Url);

    let route = route_for(&classification).unwrap();
    assert_eq!(route.path, "/results/https%3A%2F%2Fexample.com");

    let mut boundaries = panels_for(&route);
    assert_eq!(boundaries.len(), 2);

    let summary = boundaries[0].render();
    assert!(summary.contains(&"Address: https://example.com".to_string()));
    assert!(summary.contains(&"Kind: url".to_string()));

    let hostname = boundaries[1].render();
    assert!(hostname.contains(&"Hostname: example.com".to_string()));
    assert!(hostname.contains(&"TLD: com".to_string()));
    assert!(boundaries.iter().all(|b| !b.failed()));
}

#[test]
fn test_ipv6_input_renders_full_view() {
    let route = route_for(&classify("2001:db8::1")).unwrap();
    assert_eq!(route.state.address_type, AddressKind::Ipv6);
    assert_eq!(route.path, "/results/2001%3Adb8%3A%3A1");

    let mut boundaries = panels_for(&route);
    let names: Vec<&str> = boundaries.iter().map(|b| b.name()).collect();
    assert_eq!(names, vec!["Summary", "IPv6 Info"]);

    let info = boundaries[1].render();
    assert!(info.contains(&"Type: GUA".to_string()));
}

#[test]
fn test_unroutable_input_is_a_no_op() {
    assert_eq!(route_for(&classify("")), Err(AddressError::EmptyInput));
    assert_eq!(route_for(&classify("/")), Err(AddressError::EmptyInput));
    assert_eq!(
        route_for(&classify("no spaces allowed.com")),
        Err(AddressError::InvalidAddress)
    );
}

#[test]
fn test_classification_is_stable_across_dispatch() {
    // The normalized form fed back in classifies identically, so re-running
    // the submit path cannot change the route.
    let first = route_for(&classify("Example.com/")).unwrap();
    let second = route_for(&classify(&first.state.address)).unwrap();
    assert_eq!(first, second);
}
