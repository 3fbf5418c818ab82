//! Extension configuration.

use facetry_core::{FacetDescriptor, HostVersion};
use serde::{Deserialize, Serialize};

/// Settings for the post-status extension.
///
/// Every field has a default, so an empty TOML table is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionConfig {
    /// Name shown in diagnostics.
    #[serde(default = "default_name")]
    pub name: String,

    /// Source type the facet is registered under.
    #[serde(default = "default_source_type")]
    pub source_type: String,

    /// Facet key, matched against `IndexRow::facet_source`.
    #[serde(default = "default_facet_key")]
    pub facet_key: String,

    /// Label shown in the host's facet source picker.
    #[serde(default = "default_label")]
    pub label: String,

    /// Oldest host version the extension works with.
    #[serde(default = "default_min_host_version")]
    pub min_host_version: HostVersion,
}

fn default_name() -> String {
    "Facetry Post Status".to_string()
}

fn default_source_type() -> String {
    "posts".to_string()
}

fn default_facet_key() -> String {
    "post_status".to_string()
}

fn default_label() -> String {
    "Post Status".to_string()
}

fn default_min_host_version() -> HostVersion {
    HostVersion::from_parts(&MIN_HOST_VERSION)
}

/// Oldest host version supported out of the box.
pub const MIN_HOST_VERSION: [u64; 3] = [3, 0, 0];

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            source_type: default_source_type(),
            facet_key: default_facet_key(),
            label: default_label(),
            min_host_version: default_min_host_version(),
        }
    }
}

impl ExtensionConfig {
    /// The descriptor this configuration registers.
    pub fn descriptor(&self) -> FacetDescriptor {
        FacetDescriptor::lifecycle_state(&self.source_type, &self.facet_key, &self.label)
    }
}
