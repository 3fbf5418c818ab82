//! Index rows produced by the host indexer.

use serde::{Deserialize, Serialize};

/// One (entity, facet, value) record destined for the search index.
///
/// The host owns the row. Extensions may only fill in
/// `facet_display_value`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRow {
    /// Identifier of the indexed entity.
    pub entity_id: u64,
    /// Name of the facet configured in the host.
    #[serde(default)]
    pub facet_name: String,
    /// Facet key this row instantiates (e.g. "post_status").
    pub facet_source: String,
    /// Raw value, for lifecycle facets the state identifier.
    pub facet_value: String,
    /// Display value, empty until enriched.
    #[serde(default)]
    pub facet_display_value: String,
    /// Hierarchy depth, owned by the host.
    #[serde(default)]
    pub depth: u32,
}

impl IndexRow {
    /// Create a row with an empty display value.
    pub fn new(
        entity_id: u64,
        facet_source: impl Into<String>,
        facet_value: impl Into<String>,
    ) -> Self {
        let facet_source = facet_source.into();
        Self {
            entity_id,
            facet_name: facet_source.clone(),
            facet_source,
            facet_value: facet_value.into(),
            facet_display_value: String::new(),
            depth: 0,
        }
    }

    /// Set the facet name.
    pub fn with_facet_name(mut self, name: impl Into<String>) -> Self {
        self.facet_name = name.into();
        self
    }

    /// Returns `true` once a display value has been attached.
    pub fn is_enriched(&self) -> bool {
        !self.facet_display_value.is_empty()
    }
}
