//! Extension points the host indexer invokes.
//!
//! An extension implements any subset of these traits and hands them to
//! [`IndexerHost`](crate::host::IndexerHost). The host calls every
//! implementation in registration order, so many independent extensions can
//! share one pipeline. Each implementation only touches what it owns.

use facetry_core::{IndexRow, IndexerQueryArgs, Result};

use crate::registry::FacetSourceRegistry;

/// Contributes facet sources during discovery.
pub trait FacetSourceProvider: Send + Sync {
    /// Append this extension's descriptors to what the host collected so far.
    fn register_sources(&self, registry: &mut FacetSourceRegistry) -> Result<()>;
}

/// Transforms index rows during the index-build phase.
///
/// Implementations must return a row for every input and leave rows they
/// do not own untouched.
pub trait RowEnricher: Send + Sync {
    /// Enrich one row.
    fn enrich(&self, row: IndexRow) -> IndexRow;
}

/// Transforms the entity-selection query before it is issued.
pub trait QueryArgsTransformer: Send + Sync {
    /// Rewrite the query args for this pass.
    fn transform(&self, args: IndexerQueryArgs) -> IndexerQueryArgs;
}
