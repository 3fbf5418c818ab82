//! Post status as a filterable facet.
//!
//! This crate is an extension for a faceted-search indexer. Once the host
//! passes the compatibility gate, it:
//!
//! - registers a `post_status` facet source under `posts`,
//! - fills in the display label of every `post_status` index row,
//! - widens the indexer's entity-selection query to every public
//!   lifecycle state.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use facetry_core::{ExtensionState, IndexRow, IndexerQueryArgs};
//! use facetry_index::{CachedStateCatalog, HostInfo, IndexerHost, StaticStateSource};
//! use facetry_status::{ExtensionConfig, NoticeBoard, PostStatus};
//!
//! let catalog = Arc::new(CachedStateCatalog::new(StaticStateSource::builtin()));
//! let post_status = PostStatus::new(ExtensionConfig::default(), catalog);
//!
//! let mut host = IndexerHost::new(HostInfo::installed("FacetHost", "3.2.0"));
//! let notices = NoticeBoard::new();
//! assert_eq!(post_status.bootstrap(&mut host, &notices), ExtensionState::Active);
//!
//! host.discover_sources().unwrap();
//! let output = host.run_pass(
//!     IndexerQueryArgs::default(),
//!     vec![IndexRow::new(1, "post_status", "publish")],
//! );
//! assert_eq!(output.rows[0].facet_display_value, "Published");
//! ```

pub mod config;
pub mod extension;
pub mod gate;
pub mod notice;

mod proptests;

// Re-exports
pub use config::ExtensionConfig;
pub use extension::{PostStatus, PostStatusExtension};
pub use gate::{Compatibility, CompatibilityGate};
pub use notice::{AdminNotice, LogNoticeSink, NoticeBoard, NoticeLevel, NoticeSink};
