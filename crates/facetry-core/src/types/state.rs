//! Lifecycle states and their visibility classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who can see entities in a given lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Visible to anonymous visitors.
    Public,
    /// Visible only to authorized users.
    #[default]
    Private,
    /// Workflow-only state, never shown to visitors (drafts, trash, ...).
    Internal,
}

impl Visibility {
    /// Returns `true` for [`Visibility::Public`].
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

/// A workflow status an entity can be in (e.g. "publish", "draft").
///
/// States are owned by the hosting platform. Facetry only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LifecycleState {
    /// Stable identifier, stored as the raw facet value.
    pub id: String,
    /// Human-readable label, stored as the facet display value.
    pub label: String,
    /// Visibility classification.
    #[serde(default)]
    pub visibility: Visibility,
}

impl LifecycleState {
    /// Create a new lifecycle state.
    pub fn new(id: impl Into<String>, label: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            visibility,
        }
    }

    /// Returns `true` if entities in this state are publicly visible.
    pub fn is_public(&self) -> bool {
        self.visibility.is_public()
    }

    /// The post states a typical content platform registers out of the box.
    ///
    /// Only `publish` is public. Order matches the platform's registration
    /// order.
    pub fn builtin_post_states() -> Vec<LifecycleState> {
        vec![
            Self::new("publish", "Published", Visibility::Public),
            Self::new("future", "Scheduled", Visibility::Internal),
            Self::new("draft", "Draft", Visibility::Internal),
            Self::new("pending", "Pending", Visibility::Internal),
            Self::new("private", "Private", Visibility::Private),
            Self::new("trash", "Trash", Visibility::Internal),
            Self::new("auto-draft", "auto-draft", Visibility::Internal),
            Self::new("inherit", "inherit", Visibility::Internal),
        ]
    }
}

/// Filter applied when listing catalog states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StateFilter {
    /// Only return states with [`Visibility::Public`].
    #[serde(default)]
    pub public_only: bool,
}

impl StateFilter {
    /// Filter that accepts every state.
    pub fn all() -> Self {
        Self { public_only: false }
    }

    /// Filter that accepts only public states.
    pub fn public() -> Self {
        Self { public_only: true }
    }

    /// Check whether a state passes the filter.
    pub fn accepts(&self, state: &LifecycleState) -> bool {
        !self.public_only || state.is_public()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_display() {
        assert_eq!(Visibility::Public.to_string(), "public");
        assert_eq!(Visibility::Private.to_string(), "private");
        assert_eq!(Visibility::Internal.to_string(), "internal");
    }

    #[test]
    fn test_visibility_serialization() {
        let json = serde_json::to_string(&Visibility::Internal).unwrap();
        assert_eq!(json, "\"internal\"");
        let parsed: Visibility = serde_json::from_str("\"public\"").unwrap();
        assert_eq!(parsed, Visibility::Public);
    }

    #[test]
    fn test_builtin_post_states() {
        let states = LifecycleState::builtin_post_states();
        assert_eq!(states.len(), 8);
        assert_eq!(states[0].id, "publish");
        assert_eq!(states[0].label, "Published");

        let public: Vec<_> = states.iter().filter(|s| s.is_public()).collect();
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].id, "publish");
    }

    #[test]
    fn test_state_filter() {
        let publish = LifecycleState::new("publish", "Published", Visibility::Public);
        let draft = LifecycleState::new("draft", "Draft", Visibility::Internal);

        assert!(StateFilter::all().accepts(&publish));
        assert!(StateFilter::all().accepts(&draft));
        assert!(StateFilter::public().accepts(&publish));
        assert!(!StateFilter::public().accepts(&draft));
    }

    #[test]
    fn test_state_deserialization_defaults_to_private() {
        let state: LifecycleState =
            serde_json::from_str(r#"{"id": "members", "label": "Members only"}"#).unwrap();
        assert_eq!(state.visibility, Visibility::Private);
        assert!(!state.is_public());
    }
}
