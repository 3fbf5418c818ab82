//! Facet source plumbing for a faceted-search indexer.
//!
//! This crate provides the host-facing half of Facetry: the lifecycle state
//! catalog, the facet source registry, the extension traits the host calls,
//! and the indexing pass that ties them together.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      facetry-index                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  StateCatalog trait                                         │
//! │  └── CachedStateCatalog (read-through over a platform source)│
//! ├─────────────────────────────────────────────────────────────┤
//! │  FacetSourceRegistry (source type → key → descriptor)       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  FacetSourceProvider / RowEnricher / QueryArgsTransformer   │
//! │  IndexerHost (discovery, query transform, row enrichment)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! A pass runs in this order: discover sources, transform the query args
//! once, then enrich each row whose facet key is registered.

pub mod catalog;
pub mod extension;
pub mod host;
pub mod registry;

// Re-exports
pub use catalog::{CachedStateCatalog, PlatformStateSource, StateCatalog, StaticStateSource};
pub use extension::{FacetSourceProvider, QueryArgsTransformer, RowEnricher};
pub use host::{HostInfo, IndexerHost, PassOutput, PassStats};
pub use registry::FacetSourceRegistry;
