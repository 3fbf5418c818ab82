//! Core data types shared between the host indexer and its extensions.

mod facet;
mod proptests;
mod query;
mod row;
mod state;

pub use facet::{FacetDescriptor, SourceKind};
pub use query::{DEFAULT_PUBLIC_STATE, IndexerQueryArgs};
pub use row::IndexRow;
pub use state::{LifecycleState, StateFilter, Visibility};
