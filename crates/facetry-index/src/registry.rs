//! Facet source registry.
//!
//! Maps source type → facet key → [`FacetDescriptor`]. The host builds one
//! registry per discovery run and treats it as read-only afterwards.
//! Registration is purely additive: there is no way to remove a source.

use std::collections::BTreeMap;

use facetry_core::{Error, FacetDescriptor, Result};

/// Registry of facet sources known to the host indexer.
#[derive(Debug, Clone, Default)]
pub struct FacetSourceRegistry {
    // Per source type, in registration order.
    sources: BTreeMap<String, Vec<FacetDescriptor>>,
}

impl FacetSourceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor.
    ///
    /// Fails with [`Error::DuplicateKey`] if `(source_type, key)` is taken.
    pub fn register(&mut self, descriptor: FacetDescriptor) -> Result<()> {
        if self.contains(&descriptor.source_type, &descriptor.key) {
            return Err(Error::duplicate_key(descriptor.source_type, descriptor.key));
        }
        log::debug!("Registered facet source {descriptor}");
        self.sources
            .entry(descriptor.source_type.clone())
            .or_default()
            .push(descriptor);
        Ok(())
    }

    /// Descriptors registered for a source type, in registration order.
    pub fn list_for(&self, source_type: &str) -> Vec<FacetDescriptor> {
        self.sources.get(source_type).cloned().unwrap_or_default()
    }

    /// Look up a descriptor.
    pub fn get(&self, source_type: &str, key: &str) -> Option<&FacetDescriptor> {
        self.sources
            .get(source_type)
            .and_then(|list| list.iter().find(|d| d.key == key))
    }

    /// Check whether `(source_type, key)` is registered.
    pub fn contains(&self, source_type: &str, key: &str) -> bool {
        self.get(source_type, key).is_some()
    }

    /// Find a descriptor by facet key under any source type.
    pub fn find_key(&self, key: &str) -> Option<&FacetDescriptor> {
        self.sources.values().flatten().find(|d| d.key == key)
    }

    /// Source types with at least one descriptor, sorted.
    pub fn source_types(&self) -> Vec<&str> {
        self.sources.keys().map(String::as_str).collect()
    }

    /// Every descriptor, grouped by sorted source type.
    pub fn iter(&self) -> impl Iterator<Item = &FacetDescriptor> {
        self.sources.values().flatten()
    }

    /// Total number of descriptors.
    pub fn len(&self) -> usize {
        self.sources.values().map(Vec::len).sum()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn status() -> FacetDescriptor {
        FacetDescriptor::lifecycle_state("posts", "post_status", "Post Status")
    }

    #[test]
    fn test_register_and_list() {
        let mut registry = FacetSourceRegistry::new();
        registry.register(status()).unwrap();

        let listed = registry.list_for("posts");
        assert_eq!(listed, vec![status()]);
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_register_duplicate_fails() {
        let mut registry = FacetSourceRegistry::new();
        registry.register(status()).unwrap();

        let err = registry.register(status()).unwrap_err();
        assert!(matches!(err, Error::DuplicateKey { .. }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_same_key_different_source_type() {
        let mut registry = FacetSourceRegistry::new();
        registry.register(status()).unwrap();
        registry
            .register(FacetDescriptor::lifecycle_state(
                "pages",
                "post_status",
                "Page Status",
            ))
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.source_types(), vec!["pages", "posts"]);
    }

    #[test]
    fn test_list_preserves_registration_order() {
        let mut registry = FacetSourceRegistry::new();
        for key in ["zeta", "alpha", "mid"] {
            registry
                .register(FacetDescriptor::lifecycle_state("posts", key, key))
                .unwrap();
        }
        let keys: Vec<_> = registry
            .list_for("posts")
            .into_iter()
            .map(|d| d.key)
            .collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_list_for_unknown_source_type() {
        let registry = FacetSourceRegistry::new();
        assert!(registry.list_for("posts").is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_get_and_find_key() {
        let mut registry = FacetSourceRegistry::new();
        registry.register(status()).unwrap();

        assert!(registry.contains("posts", "post_status"));
        assert!(!registry.contains("posts", "post_type"));
        assert_eq!(registry.get("posts", "post_status").unwrap().label, "Post Status");
        assert_eq!(registry.find_key("post_status").unwrap().source_type, "posts");
        assert!(registry.find_key("missing").is_none());
        assert_eq!(registry.iter().count(), 1);
    }
}
