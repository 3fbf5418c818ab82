//! Facetry Core: shared types, errors, and lifecycle tracking.
//!
//! This crate provides the foundational types used across all Facetry crates.
//! It has no internal Facetry dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`types`]: Lifecycle states, facet descriptors, index rows, query args
//! - [`version`]: Host version parsing and comparison
//! - [`lifecycle`]: Extension lifecycle state machine

pub mod error;
pub mod lifecycle;
pub mod types;
pub mod version;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use lifecycle::{ExtensionHandle, ExtensionState};
pub use types::{
    DEFAULT_PUBLIC_STATE, FacetDescriptor, IndexRow, IndexerQueryArgs, LifecycleState,
    SourceKind, StateFilter, Visibility,
};
pub use version::HostVersion;
