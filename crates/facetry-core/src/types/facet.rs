//! Facet source descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the values of a facet come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum SourceKind {
    /// Values are the entity's lifecycle state identifiers.
    LifecycleState,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LifecycleState => write!(f, "lifecycle_state"),
        }
    }
}

/// A filterable dimension an extension contributes to a source type.
///
/// `(source_type, key)` is unique within a registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacetDescriptor {
    /// Entity type the facet applies to (e.g. "posts").
    pub source_type: String,
    /// Facet key, matched against [`IndexRow::facet_source`](crate::IndexRow).
    pub key: String,
    /// Label shown in the host's facet source picker.
    pub label: String,
    /// Origin of the facet values.
    pub kind: SourceKind,
}

impl FacetDescriptor {
    /// Create a descriptor for a lifecycle-state facet.
    pub fn lifecycle_state(
        source_type: impl Into<String>,
        key: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            source_type: source_type.into(),
            key: key.into(),
            label: label.into(),
            kind: SourceKind::LifecycleState,
        }
    }
}

impl fmt::Display for FacetDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({})", self.source_type, self.key, self.label)
    }
}
