//! Arguments of the indexer's entity-selection query.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// State the host selects when no extension widens the query.
pub const DEFAULT_PUBLIC_STATE: &str = "publish";

/// Entity-selection query the host issues once per indexing pass.
///
/// Built fresh for every pass. Extensions may rewrite `state_filter`; any
/// host-specific arguments travel in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexerQueryArgs {
    /// Entity types to select.
    #[serde(default = "default_entity_types")]
    pub entity_types: Vec<String>,

    /// Lifecycle state identifiers to select.
    #[serde(default = "default_state_filter")]
    pub state_filter: Vec<String>,

    /// Maximum number of entities, `None` for no limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Host-specific arguments.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

fn default_entity_types() -> Vec<String> {
    vec!["any".to_string()]
}

fn default_state_filter() -> Vec<String> {
    vec![DEFAULT_PUBLIC_STATE.to_string()]
}

impl Default for IndexerQueryArgs {
    fn default() -> Self {
        Self {
            entity_types: default_entity_types(),
            state_filter: default_state_filter(),
            limit: None,
            extra: BTreeMap::new(),
        }
    }
}

impl IndexerQueryArgs {
    /// Replace the state filter.
    pub fn with_state_filter<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state_filter = states.into_iter().map(Into::into).collect();
        self
    }

    /// Check whether a state identifier is selected.
    pub fn selects_state(&self, id: &str) -> bool {
        self.state_filter.iter().any(|s| s == id)
    }
}
