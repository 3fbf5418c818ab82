//! Lifecycle state catalog.
//!
//! The hosting platform owns the set of lifecycle states. This module
//! exposes a read-only, cached view over it:
//!
//! - [`PlatformStateSource`]: the platform's own state registry (external).
//! - [`StaticStateSource`]: a fixed list, from configuration or the
//!   built-in post states.
//! - [`CachedStateCatalog`]: loads a source once, on first access, and
//!   serves every later lookup from memory.
//!
//! # Example
//!
//! ```rust
//! use facetry_core::StateFilter;
//! use facetry_index::catalog::{CachedStateCatalog, StateCatalog, StaticStateSource};
//!
//! let catalog = CachedStateCatalog::new(StaticStateSource::builtin());
//! let public = catalog.list_states(StateFilter::public());
//! assert_eq!(public[0].id, "publish");
//! assert_eq!(catalog.describe("draft").unwrap().label, "Draft");
//! ```

use std::collections::HashSet;
use std::sync::OnceLock;

use facetry_core::{Error, LifecycleState, Result, StateFilter};

/// Read access to the known lifecycle states.
pub trait StateCatalog: Send + Sync {
    /// List states passing `filter`, in platform order.
    fn list_states(&self, filter: StateFilter) -> Vec<LifecycleState>;

    /// Look up a single state.
    ///
    /// Unknown identifiers yield [`Error::StateNotFound`].
    fn describe(&self, id: &str) -> Result<LifecycleState>;
}

/// The platform's registry of lifecycle states.
pub trait PlatformStateSource: Send + Sync {
    /// Fetch every registered state.
    fn fetch_states(&self) -> Result<Vec<LifecycleState>>;

    /// Name used in log messages.
    fn name(&self) -> &str {
        "platform"
    }
}

/// A platform source backed by a fixed list of states.
#[derive(Debug, Clone, Default)]
pub struct StaticStateSource {
    states: Vec<LifecycleState>,
}

impl StaticStateSource {
    /// Create a source from an explicit list.
    pub fn new(states: Vec<LifecycleState>) -> Self {
        Self { states }
    }

    /// The built-in post states (only `publish` is public).
    pub fn builtin() -> Self {
        Self::new(LifecycleState::builtin_post_states())
    }
}

impl PlatformStateSource for StaticStateSource {
    fn fetch_states(&self) -> Result<Vec<LifecycleState>> {
        Ok(self.states.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Read-through cache over a [`PlatformStateSource`].
///
/// The source is consulted at most once per catalog. A failed load is
/// logged and cached as an empty catalog: enrichment then passes rows
/// through and scope expansion leaves queries untouched.
pub struct CachedStateCatalog<S> {
    source: S,
    cache: OnceLock<Vec<LifecycleState>>,
}

impl<S: PlatformStateSource> CachedStateCatalog<S> {
    /// Create a catalog. Nothing is loaded until the first lookup.
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: OnceLock::new(),
        }
    }

    /// Returns `true` once the source has been consulted.
    pub fn is_loaded(&self) -> bool {
        self.cache.get().is_some()
    }

    fn states(&self) -> &[LifecycleState] {
        self.cache.get_or_init(|| match self.source.fetch_states() {
            Ok(states) => {
                let states = dedupe(states);
                log::debug!(
                    "Loaded {} lifecycle states from {} source",
                    states.len(),
                    self.source.name()
                );
                states
            }
            Err(e) => {
                log::warn!(
                    "Failed to load lifecycle states from {} source: {e}",
                    self.source.name()
                );
                Vec::new()
            }
        })
    }
}

/// Keep the first occurrence of each identifier.
fn dedupe(states: Vec<LifecycleState>) -> Vec<LifecycleState> {
    let mut seen = HashSet::new();
    states
        .into_iter()
        .filter(|s| {
            let fresh = seen.insert(s.id.clone());
            if !fresh {
                log::warn!("Ignoring duplicate lifecycle state '{}'", s.id);
            }
            fresh
        })
        .collect()
}

impl<S: PlatformStateSource> StateCatalog for CachedStateCatalog<S> {
    fn list_states(&self, filter: StateFilter) -> Vec<LifecycleState> {
        self.states()
            .iter()
            .filter(|s| filter.accepts(s))
            .cloned()
            .collect()
    }

    fn describe(&self, id: &str) -> Result<LifecycleState> {
        self.states()
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| Error::state_not_found(id))
    }
}

impl<S> std::fmt::Debug for CachedStateCatalog<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedStateCatalog")
            .field("loaded", &self.cache.get().map(Vec::len))
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
