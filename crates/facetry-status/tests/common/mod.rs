//! Common test utilities for post-status integration tests.

use std::sync::Arc;

use facetry_core::{LifecycleState, Visibility};
use facetry_index::{CachedStateCatalog, HostInfo, IndexerHost, StateCatalog, StaticStateSource};
use facetry_status::{ExtensionConfig, NoticeBoard, PostStatus};

/// Name the test host publishes.
pub const HOST_NAME: &str = "FacetHost";

/// Test harness bundling a host, the extension handle, and a notice board.
pub struct TestHarness {
    /// The host indexer.
    pub host: IndexerHost,
    /// The extension handle.
    pub post_status: PostStatus,
    /// Collected admin notices.
    pub notices: NoticeBoard,
}

impl TestHarness {
    /// Harness over the two-state scenario catalog and the given host.
    pub fn new(host: HostInfo) -> Self {
        Self::with_catalog(host, scenario_catalog())
    }

    /// Harness over a custom catalog.
    pub fn with_catalog(host: HostInfo, catalog: Arc<dyn StateCatalog>) -> Self {
        Self {
            host: IndexerHost::new(host),
            post_status: PostStatus::new(ExtensionConfig::default(), catalog),
            notices: NoticeBoard::new(),
        }
    }

    /// Harness for an installed host at `version`.
    pub fn installed(version: &str) -> Self {
        Self::new(HostInfo::installed(HOST_NAME, version))
    }

    /// Run the extension bootstrap.
    pub fn bootstrap(&mut self) -> facetry_core::ExtensionState {
        self.post_status.bootstrap(&mut self.host, &self.notices)
    }
}

/// Catalog with `publish` (public) and `draft` (private).
pub fn scenario_catalog() -> Arc<dyn StateCatalog> {
    catalog(vec![
        LifecycleState::new("publish", "Published", Visibility::Public),
        LifecycleState::new("draft", "Draft", Visibility::Private),
    ])
}

/// Catalog over an explicit state list.
pub fn catalog(states: Vec<LifecycleState>) -> Arc<dyn StateCatalog> {
    Arc::new(CachedStateCatalog::new(StaticStateSource::new(states)))
}
