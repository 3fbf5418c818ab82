//! End-to-end indexing passes through the host.

use facetry_core::{IndexRow, IndexerQueryArgs, LifecycleState, Visibility};

use crate::common::{TestHarness, catalog};

fn active_harness() -> TestHarness {
    let mut harness = TestHarness::installed("3.2.0");
    harness.bootstrap();
    harness.host.discover_sources().unwrap();
    harness
}

#[test]
fn test_published_row_gets_label() {
    let harness = active_harness();
    let output = harness.host.run_pass(
        IndexerQueryArgs::default(),
        vec![IndexRow::new(10, "post_status", "publish")],
    );

    let mut expected = IndexRow::new(10, "post_status", "publish");
    expected.facet_display_value = "Published".to_string();
    assert_eq!(output.rows, vec![expected]);
    assert_eq!(output.stats.rows_enriched, 1);
}

#[test]
fn test_filter_becomes_exactly_the_public_set() {
    let harness = active_harness();
    let args = IndexerQueryArgs::default().with_state_filter(["publish"]);

    let output = harness.host.run_pass(args, Vec::new());
    assert_eq!(output.query_args.state_filter, vec!["publish"]);
    assert!(!output.stats.scope_rewritten);
}

#[test]
fn test_filter_is_replaced_not_unioned() {
    let mut harness = TestHarness::with_catalog(
        facetry_index::HostInfo::installed("FacetHost", "3.2.0"),
        catalog(vec![
            LifecycleState::new("publish", "Published", Visibility::Public),
            LifecycleState::new("members", "Members", Visibility::Public),
            LifecycleState::new("draft", "Draft", Visibility::Internal),
        ]),
    );
    harness.bootstrap();
    harness.host.discover_sources().unwrap();

    let args = IndexerQueryArgs::default().with_state_filter(["draft"]);
    let output = harness.host.run_pass(args, Vec::new());
    assert_eq!(output.query_args.state_filter, vec!["publish", "members"]);
    assert!(output.stats.scope_rewritten);
}

#[test]
fn test_mixed_rows() {
    let harness = active_harness();
    let rows = vec![
        IndexRow::new(1, "post_status", "publish"),
        IndexRow::new(2, "post_status", "draft"),
        IndexRow::new(3, "post_status", "archived"),
        IndexRow::new(4, "category", "news"),
    ];

    let output = harness.host.run_pass(IndexerQueryArgs::default(), rows);
    let labels: Vec<_> = output
        .rows
        .iter()
        .map(|r| r.facet_display_value.as_str())
        .collect();
    assert_eq!(labels, vec!["Published", "Draft", "", ""]);
    assert_eq!(output.stats.rows_processed, 4);
    assert_eq!(output.stats.rows_enriched, 2);
    assert_eq!(output.stats.rows_unregistered, 1);
}

#[test]
fn test_disabled_extension_leaves_pass_untouched() {
    let mut harness = TestHarness::installed("2.0");
    harness.bootstrap();
    harness.host.discover_sources().unwrap();

    let args = IndexerQueryArgs::default().with_state_filter(["draft"]);
    let rows = vec![IndexRow::new(1, "post_status", "publish")];
    let output = harness.host.run_pass(args.clone(), rows.clone());

    assert_eq!(output.query_args, args);
    assert_eq!(output.rows, rows);
    assert_eq!(output.stats.rows_unregistered, 1);
}

#[test]
fn test_degenerate_catalog_keeps_default_scope() {
    let mut harness = TestHarness::with_catalog(
        facetry_index::HostInfo::installed("FacetHost", "3.2.0"),
        catalog(Vec::new()),
    );
    harness.bootstrap();
    harness.host.discover_sources().unwrap();

    let output = harness.host.run_pass(
        IndexerQueryArgs::default(),
        vec![IndexRow::new(1, "post_status", "publish")],
    );
    assert_eq!(output.query_args, IndexerQueryArgs::default());
    assert_eq!(output.rows[0].facet_display_value, "");
}
