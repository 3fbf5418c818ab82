//! The post-status extension and its bootstrap handle.
//!
//! [`PostStatusExtension`] implements the three host extension points:
//!
//! - facet discovery: registers `posts/post_status`,
//! - row enrichment: attaches the lifecycle state label to rows it owns,
//! - scope expansion: makes the pass select every public lifecycle state.
//!
//! [`PostStatus`] is the caller-held handle that runs the compatibility
//! gate once and wires the extension into an [`IndexerHost`]. It replaces a
//! process-wide singleton: construct it at bootstrap and pass it (or clones
//! of it) to whoever needs the extension.

use std::fmt;
use std::sync::{Arc, OnceLock};

use facetry_core::{
    Error, ExtensionHandle, ExtensionState, FacetDescriptor, IndexRow, IndexerQueryArgs, Result,
    StateFilter,
};
use facetry_index::{
    FacetSourceProvider, FacetSourceRegistry, IndexerHost, QueryArgsTransformer, RowEnricher,
    StateCatalog,
};

use crate::config::ExtensionConfig;
use crate::gate::{Compatibility, CompatibilityGate};
use crate::notice::NoticeSink;

// ============================================================================
// PostStatusExtension
// ============================================================================

/// Lifecycle-state facet for posts.
pub struct PostStatusExtension {
    descriptor: FacetDescriptor,
    catalog: Arc<dyn StateCatalog>,
}

impl PostStatusExtension {
    /// Create the extension over a state catalog.
    pub fn new(config: &ExtensionConfig, catalog: Arc<dyn StateCatalog>) -> Self {
        Self {
            descriptor: config.descriptor(),
            catalog,
        }
    }

    /// The descriptor this extension registers.
    pub fn descriptor(&self) -> &FacetDescriptor {
        &self.descriptor
    }

    /// Returns `true` if the row instantiates this extension's facet.
    pub fn owns(&self, row: &IndexRow) -> bool {
        row.facet_source == self.descriptor.key
    }
}

impl FacetSourceProvider for PostStatusExtension {
    fn register_sources(&self, registry: &mut FacetSourceRegistry) -> Result<()> {
        match registry.register(self.descriptor.clone()) {
            Ok(()) => Ok(()),
            // Our own descriptor is already there: re-registration is a no-op.
            Err(Error::DuplicateKey { .. })
                if registry.get(&self.descriptor.source_type, &self.descriptor.key)
                    == Some(&self.descriptor) =>
            {
                log::debug!("Facet source {} already registered", self.descriptor);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

impl RowEnricher for PostStatusExtension {
    fn enrich(&self, mut row: IndexRow) -> IndexRow {
        if !self.owns(&row) {
            return row;
        }
        match self.catalog.describe(&row.facet_value) {
            Ok(state) => {
                row.facet_display_value = state.label;
                row
            }
            Err(e) => {
                log::debug!("Leaving row for entity {} unenriched: {e}", row.entity_id);
                row
            }
        }
    }
}

impl QueryArgsTransformer for PostStatusExtension {
    fn transform(&self, mut args: IndexerQueryArgs) -> IndexerQueryArgs {
        let public = self.catalog.list_states(StateFilter::public());
        if public.is_empty() {
            log::warn!("No public lifecycle states reported; leaving query scope unchanged");
            return args;
        }
        args.state_filter = public.into_iter().map(|s| s.id).collect();
        log::debug!("Indexer state filter set to {:?}", args.state_filter);
        args
    }
}

impl fmt::Debug for PostStatusExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostStatusExtension")
            .field("descriptor", &self.descriptor)
            .finish()
    }
}

// ============================================================================
// PostStatus handle
// ============================================================================

/// Caller-held handle that bootstraps the extension exactly once.
///
/// Cheap to clone. All clones share the same lifecycle and the same lazily
/// constructed [`PostStatusExtension`].
///
/// The handle is bound to the first [`IndexerHost`] it bootstraps into. Use
/// one handle per host.
#[derive(Clone)]
pub struct PostStatus {
    inner: Arc<PostStatusInner>,
}

struct PostStatusInner {
    config: ExtensionConfig,
    catalog: Arc<dyn StateCatalog>,
    lifecycle: ExtensionHandle,
    gate: CompatibilityGate,
    outcome: OnceLock<ExtensionState>,
    host_id: OnceLock<u64>,
    extension: OnceLock<Arc<PostStatusExtension>>,
}

impl PostStatus {
    /// Create an uninitialized handle.
    pub fn new(config: ExtensionConfig, catalog: Arc<dyn StateCatalog>) -> Self {
        let gate = CompatibilityGate::new(&config.name, config.min_host_version.clone());
        let lifecycle = ExtensionHandle::new(&config.name);
        Self {
            inner: Arc::new(PostStatusInner {
                config,
                catalog,
                lifecycle,
                gate,
                outcome: OnceLock::new(),
                host_id: OnceLock::new(),
                extension: OnceLock::new(),
            }),
        }
    }

    /// Check the host and, if compatible, hook the extension into it.
    ///
    /// Only the first call does any work. Later calls, from this handle or
    /// any clone, return the settled state without touching `host` again and
    /// without emitting another notice. A later call with a different host
    /// logs a warning: that host receives no hooks.
    pub fn bootstrap(&self, host: &mut IndexerHost, notices: &dyn NoticeSink) -> ExtensionState {
        let state = self
            .inner
            .outcome
            .get_or_init(|| self.activate(host, notices))
            .clone();
        if !self.is_bound_to(host) {
            log::warn!(
                "{}: already bootstrapped into another host, host {} was not modified",
                self.inner.config.name,
                host.id()
            );
        }
        state
    }

    /// Returns `true` if `host` is the host this handle bootstrapped into.
    pub fn is_bound_to(&self, host: &IndexerHost) -> bool {
        self.inner.host_id.get() == Some(&host.id())
    }

    fn activate(&self, host: &mut IndexerHost, notices: &dyn NoticeSink) -> ExtensionState {
        let inner = &self.inner;
        let _ = inner.host_id.set(host.id());
        let outcome = inner.gate.check(host.info());
        inner.lifecycle.set_state(ExtensionState::CompatibilityChecked);

        if let Compatibility::Compatible(version) = &outcome {
            log::info!(
                "{}: {} {version} is compatible, registering hooks",
                inner.config.name,
                host.info().name
            );
            let extension = self.extension();
            host.add_source_provider(extension.clone());
            host.add_row_enricher(extension.clone());
            host.add_query_transformer(extension);
            inner.lifecycle.set_state(ExtensionState::Active);
            return ExtensionState::Active;
        }

        if let Some(notice) = inner.gate.notice(host.info(), &outcome) {
            notices.emit(notice);
        }
        let state = ExtensionState::Disabled(outcome.to_string());
        inner.lifecycle.set_state(state.clone());
        state
    }

    /// The extension instance, constructed on first access.
    pub fn extension(&self) -> Arc<PostStatusExtension> {
        self.inner
            .extension
            .get_or_init(|| {
                Arc::new(PostStatusExtension::new(
                    &self.inner.config,
                    Arc::clone(&self.inner.catalog),
                ))
            })
            .clone()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ExtensionState {
        self.inner.lifecycle.state()
    }

    /// Lifecycle handle, for subscribing to state changes.
    pub fn lifecycle(&self) -> &ExtensionHandle {
        &self.inner.lifecycle
    }

    /// The extension configuration.
    pub fn config(&self) -> &ExtensionConfig {
        &self.inner.config
    }

    /// The compatibility gate.
    pub fn gate(&self) -> &CompatibilityGate {
        &self.inner.gate
    }
}

impl fmt::Debug for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostStatus")
            .field("name", &self.inner.config.name)
            .field("state", &self.state())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
