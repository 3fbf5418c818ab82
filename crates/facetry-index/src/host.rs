//! Host-side indexing pass orchestration.
//!
//! `IndexerHost` models the extension surface of the faceted-search
//! indexer: it collects extensions, builds the facet source registry, and
//! runs an indexing pass over raw rows.
//!
//! # Usage
//!
//! ```rust,ignore
//! use facetry_index::{HostInfo, IndexerHost};
//!
//! let mut host = IndexerHost::new(HostInfo::installed("indexer", "3.2.0"));
//! host.add_source_provider(extension.clone());
//! host.add_row_enricher(extension.clone());
//! host.add_query_transformer(extension);
//!
//! host.discover_sources()?;
//! let output = host.run_pass(IndexerQueryArgs::default(), rows);
//! println!("Enriched {} rows", output.stats.rows_enriched);
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use facetry_core::{FacetDescriptor, IndexRow, IndexerQueryArgs, Result};
use serde::{Deserialize, Serialize};

use crate::extension::{FacetSourceProvider, QueryArgsTransformer, RowEnricher};
use crate::registry::FacetSourceRegistry;

// ============================================================================
// HostInfo
// ============================================================================

/// Readiness signal published by the host indexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostInfo {
    /// Product name, used in diagnostics.
    pub name: String,
    /// Installed version, `None` when the host is not installed.
    pub version: Option<String>,
}

impl HostInfo {
    /// An installed host.
    pub fn installed(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: Some(version.into()),
        }
    }

    /// A host that is not present.
    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    /// Returns `true` if a version was published.
    pub fn is_installed(&self) -> bool {
        self.version.is_some()
    }
}

// ============================================================================
// Pass output
// ============================================================================

/// Statistics about one indexing pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassStats {
    /// Number of facet sources known when the pass ran.
    pub sources_discovered: usize,
    /// Number of rows handed to the pass.
    pub rows_processed: usize,
    /// Rows whose display value was filled in by an extension.
    pub rows_enriched: usize,
    /// Rows referencing a facet key no source registered.
    pub rows_unregistered: usize,
    /// Whether an extension rewrote the state filter (widened or narrowed).
    pub scope_rewritten: bool,
}

/// Result of [`IndexerHost::run_pass`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassOutput {
    /// Query args after every transformer ran.
    pub query_args: IndexerQueryArgs,
    /// Rows after enrichment, in input order.
    pub rows: Vec<IndexRow>,
    /// Pass statistics.
    pub stats: PassStats,
}

// ============================================================================
// IndexerHost
// ============================================================================

static NEXT_HOST_ID: AtomicU64 = AtomicU64::new(1);

/// The host indexer's extension surface.
pub struct IndexerHost {
    id: u64,
    info: HostInfo,
    builtin_sources: Vec<FacetDescriptor>,
    providers: Vec<Arc<dyn FacetSourceProvider>>,
    enrichers: Vec<Arc<dyn RowEnricher>>,
    transformers: Vec<Arc<dyn QueryArgsTransformer>>,
    registry: FacetSourceRegistry,
}

impl IndexerHost {
    /// Create a host with no extensions.
    pub fn new(info: HostInfo) -> Self {
        Self {
            id: NEXT_HOST_ID.fetch_add(1, Ordering::Relaxed),
            info,
            builtin_sources: Vec::new(),
            providers: Vec::new(),
            enrichers: Vec::new(),
            transformers: Vec::new(),
            registry: FacetSourceRegistry::new(),
        }
    }

    /// Add a source the host itself provides (e.g. taxonomies).
    pub fn with_builtin_source(mut self, descriptor: FacetDescriptor) -> Self {
        self.builtin_sources.push(descriptor);
        self
    }

    /// Process-unique identifier of this host instance.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The host's readiness signal.
    pub fn info(&self) -> &HostInfo {
        &self.info
    }

    /// Hook a facet source provider into discovery.
    pub fn add_source_provider(&mut self, provider: Arc<dyn FacetSourceProvider>) {
        self.providers.push(provider);
    }

    /// Hook a row enricher into the index-build phase.
    pub fn add_row_enricher(&mut self, enricher: Arc<dyn RowEnricher>) {
        self.enrichers.push(enricher);
    }

    /// Hook a query args transformer into pass setup.
    pub fn add_query_transformer(&mut self, transformer: Arc<dyn QueryArgsTransformer>) {
        self.transformers.push(transformer);
    }

    /// Number of hooked (providers, enrichers, transformers).
    pub fn hook_counts(&self) -> (usize, usize, usize) {
        (
            self.providers.len(),
            self.enrichers.len(),
            self.transformers.len(),
        )
    }

    /// Build the facet source registry from built-in sources and providers.
    ///
    /// Replaces any previously discovered registry. A provider error (e.g. a
    /// duplicate key) aborts discovery and leaves the previous registry in
    /// place.
    pub fn discover_sources(&mut self) -> Result<&FacetSourceRegistry> {
        let mut registry = FacetSourceRegistry::new();
        for descriptor in &self.builtin_sources {
            registry.register(descriptor.clone())?;
        }
        for provider in &self.providers {
            provider.register_sources(&mut registry)?;
        }
        log::info!(
            "{}: discovered {} facet sources",
            self.info.name,
            registry.len()
        );
        self.registry = registry;
        Ok(&self.registry)
    }

    /// The registry from the last discovery.
    pub fn registry(&self) -> &FacetSourceRegistry {
        &self.registry
    }

    /// Run every query args transformer in order.
    pub fn transform_query_args(&self, args: IndexerQueryArgs) -> IndexerQueryArgs {
        self.transformers
            .iter()
            .fold(args, |args, t| t.transform(args))
    }

    /// Run every row enricher in order.
    pub fn transform_row(&self, row: IndexRow) -> IndexRow {
        self.enrichers.iter().fold(row, |row, e| e.enrich(row))
    }

    /// Run one indexing pass.
    ///
    /// Query args are transformed once, before any row is processed. Rows
    /// whose facet key is not in the registry skip enrichment.
    pub fn run_pass<I>(&self, args: IndexerQueryArgs, rows: I) -> PassOutput
    where
        I: IntoIterator<Item = IndexRow>,
    {
        let original_filter = args.state_filter.clone();
        let query_args = self.transform_query_args(args);

        let mut stats = PassStats {
            sources_discovered: self.registry.len(),
            scope_rewritten: query_args.state_filter != original_filter,
            ..Default::default()
        };

        let rows: Vec<IndexRow> = rows
            .into_iter()
            .map(|row| {
                stats.rows_processed += 1;
                if self.registry.find_key(&row.facet_source).is_none() {
                    log::debug!(
                        "Row for entity {} references unregistered facet '{}'",
                        row.entity_id,
                        row.facet_source
                    );
                    stats.rows_unregistered += 1;
                    return row;
                }
                let before = row.facet_display_value.clone();
                let row = self.transform_row(row);
                if row.facet_display_value != before {
                    stats.rows_enriched += 1;
                }
                row
            })
            .collect();

        log::info!(
            "{}: pass processed {} rows ({} enriched, {} unregistered)",
            self.info.name,
            stats.rows_processed,
            stats.rows_enriched,
            stats.rows_unregistered
        );

        PassOutput {
            query_args,
            rows,
            stats,
        }
    }
}

impl fmt::Debug for IndexerHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexerHost")
            .field("id", &self.id)
            .field("info", &self.info)
            .field("providers", &self.providers.len())
            .field("enrichers", &self.enrichers.len())
            .field("transformers", &self.transformers.len())
            .field("sources", &self.registry.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
