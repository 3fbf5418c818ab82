//! Compatibility gate and registration lifecycle.

use facetry_core::{ExtensionState, FacetDescriptor};
use facetry_index::HostInfo;

use crate::common::{HOST_NAME, TestHarness};

#[test]
fn test_outdated_host_disables_extension() {
    let mut harness = TestHarness::installed("2.5.0");

    let state = harness.bootstrap();
    assert!(matches!(state, ExtensionState::Disabled(_)));
    assert_eq!(harness.post_status.state(), state);

    let notices = harness.notices.notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].message.contains("2.5.0"));
    assert!(notices[0].message.contains("3.0.0"));

    harness.host.discover_sources().unwrap();
    assert!(
        harness
            .host
            .registry()
            .list_for("posts")
            .iter()
            .all(|d| d.key != "post_status")
    );
}

#[test]
fn test_missing_host_disables_extension() {
    let mut harness = TestHarness::new(HostInfo::missing(HOST_NAME));

    let state = harness.bootstrap();
    assert!(matches!(state, ExtensionState::Disabled(_)));

    let notices = harness.notices.notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].message.contains("doesn't seem to be installed"));
    assert_eq!(harness.host.hook_counts(), (0, 0, 0));
}

#[test]
fn test_compatible_host_activates_extension() {
    let mut harness = TestHarness::installed("3.0.0");

    assert_eq!(harness.bootstrap(), ExtensionState::Active);
    assert!(harness.notices.is_empty());

    harness.host.discover_sources().unwrap();
    assert_eq!(
        harness.host.registry().list_for("posts"),
        vec![FacetDescriptor::lifecycle_state(
            "posts",
            "post_status",
            "Post Status"
        )]
    );
}

#[test]
fn test_double_initialization_registers_once() {
    let mut harness = TestHarness::installed("3.1.0");

    harness.bootstrap();
    harness.bootstrap();
    let clone = harness.post_status.clone();
    clone.bootstrap(&mut harness.host, &harness.notices);

    harness.host.discover_sources().unwrap();
    let matching: Vec<_> = harness
        .host
        .registry()
        .list_for("posts")
        .into_iter()
        .filter(|d| d.key == "post_status")
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(harness.host.hook_counts(), (1, 1, 1));
}

#[test]
fn test_lifecycle_subscribers_see_final_state() {
    let mut harness = TestHarness::installed("3.1.0");
    let rx = harness.post_status.lifecycle().subscribe();

    harness.bootstrap();
    assert_eq!(*rx.borrow(), ExtensionState::Active);
}

#[test]
fn test_builtin_host_source_coexists() {
    let mut harness = TestHarness::installed("3.1.0");
    harness.host = facetry_index::IndexerHost::new(HostInfo::installed(HOST_NAME, "3.1.0"))
        .with_builtin_source(FacetDescriptor::lifecycle_state(
            "posts",
            "post_type",
            "Post Type",
        ));

    harness.bootstrap();
    harness.host.discover_sources().unwrap();

    let keys: Vec<_> = harness
        .host
        .registry()
        .list_for("posts")
        .into_iter()
        .map(|d| d.key)
        .collect();
    assert_eq!(keys, vec!["post_type", "post_status"]);
}
