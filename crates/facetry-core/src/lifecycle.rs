//! Extension lifecycle state management.
//!
//! Provides [`ExtensionState`] and [`ExtensionHandle`] for tracking whether
//! an extension passed its compatibility check and got wired into the host.
//!
//! ```text
//! Uninitialized ──► CompatibilityChecked ──┬──► Active
//!                                          └──► Disabled(reason)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use facetry_core::lifecycle::{ExtensionHandle, ExtensionState};
//!
//! let handle = ExtensionHandle::new("post-status");
//! assert_eq!(handle.state(), ExtensionState::Uninitialized);
//!
//! handle.set_state(ExtensionState::CompatibilityChecked);
//! handle.set_state(ExtensionState::Active);
//! assert!(handle.state().is_active());
//! ```

use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

// ============================================================================
// ExtensionState
// ============================================================================

/// State of an extension in its lifecycle.
#[derive(Clone, Debug, PartialEq)]
pub enum ExtensionState {
    /// Bootstrap has not run yet.
    Uninitialized,
    /// The host was inspected; wiring has not been decided yet.
    CompatibilityChecked,
    /// Registered with the host and participating in indexing passes.
    Active,
    /// The host is missing or too old; the extension is a no-op.
    Disabled(String),
}

impl ExtensionState {
    /// Returns `true` if the extension is wired into the host.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Returns `true` if the extension has settled (Active or Disabled).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Active | Self::Disabled(_))
    }

    /// Check whether moving to `next` is a legal transition.
    ///
    /// Re-entering the current terminal state is allowed so that repeated
    /// bootstraps stay harmless.
    pub fn can_transition_to(&self, next: &ExtensionState) -> bool {
        use ExtensionState::*;
        match (self, next) {
            (Uninitialized, CompatibilityChecked) => true,
            (CompatibilityChecked, Active | Disabled(_)) => true,
            (Active, Active) => true,
            (Disabled(a), Disabled(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for ExtensionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::CompatibilityChecked => write!(f, "compatibility-checked"),
            Self::Active => write!(f, "active"),
            Self::Disabled(reason) => write!(f, "disabled: {reason}"),
        }
    }
}

// ============================================================================
// ExtensionHandle
// ============================================================================

/// Thread-safe handle for observing and updating extension state.
///
/// Cheap to clone (Arc internals). State changes are broadcast
/// to all subscribers via a watch channel.
#[derive(Clone)]
pub struct ExtensionHandle {
    inner: Arc<ExtensionHandleInner>,
}

struct ExtensionHandleInner {
    name: String,
    tx: watch::Sender<ExtensionState>,
}

impl ExtensionHandle {
    /// Create a new handle with the given extension name.
    ///
    /// Initial state is [`ExtensionState::Uninitialized`].
    pub fn new(name: impl Into<String>) -> Self {
        let (tx, _rx) = watch::channel(ExtensionState::Uninitialized);
        Self {
            inner: Arc::new(ExtensionHandleInner {
                name: name.into(),
                tx,
            }),
        }
    }

    /// Get the extension name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Get the current state.
    pub fn state(&self) -> ExtensionState {
        self.inner.tx.borrow().clone()
    }

    /// Update the state.
    ///
    /// Illegal transitions are logged and ignored. Returns whether the state
    /// was applied.
    pub fn set_state(&self, state: ExtensionState) -> bool {
        let name = &self.inner.name;
        let mut applied = false;
        self.inner.tx.send_if_modified(|current| {
            if !current.can_transition_to(&state) {
                log::warn!("Extension '{name}': ignoring transition {current} → {state}");
                return false;
            }
            applied = true;
            if *current == state {
                return false;
            }
            log::info!("Extension '{name}' → {state}");
            *current = state.clone();
            true
        });
        applied
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<ExtensionState> {
        self.inner.tx.subscribe()
    }
}

impl fmt::Debug for ExtensionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionHandle")
            .field("name", &self.inner.name)
            .field("state", &self.state())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_state_display() {
        assert_eq!(ExtensionState::Uninitialized.to_string(), "uninitialized");
        assert_eq!(
            ExtensionState::CompatibilityChecked.to_string(),
            "compatibility-checked"
        );
        assert_eq!(ExtensionState::Active.to_string(), "active");
        assert_eq!(
            ExtensionState::Disabled("host missing".to_string()).to_string(),
            "disabled: host missing"
        );
    }

    #[test]
    fn test_extension_state_predicates() {
        assert!(ExtensionState::Active.is_active());
        assert!(!ExtensionState::CompatibilityChecked.is_active());
        assert!(!ExtensionState::Disabled("x".into()).is_active());

        assert!(ExtensionState::Active.is_terminal());
        assert!(ExtensionState::Disabled("x".into()).is_terminal());
        assert!(!ExtensionState::Uninitialized.is_terminal());
        assert!(!ExtensionState::CompatibilityChecked.is_terminal());
    }

    #[test]
    fn test_legal_transitions() {
        use ExtensionState::*;
        assert!(Uninitialized.can_transition_to(&CompatibilityChecked));
        assert!(CompatibilityChecked.can_transition_to(&Active));
        assert!(CompatibilityChecked.can_transition_to(&Disabled("old".into())));
        assert!(Active.can_transition_to(&Active));

        assert!(!Uninitialized.can_transition_to(&Active));
        assert!(!Active.can_transition_to(&Disabled("late".into())));
        assert!(!Disabled("old".into()).can_transition_to(&Active));
        assert!(!Active.can_transition_to(&Uninitialized));
    }

    #[test]
    fn test_handle_initial_state() {
        let handle = ExtensionHandle::new("test");
        assert_eq!(handle.name(), "test");
        assert_eq!(handle.state(), ExtensionState::Uninitialized);
    }

    #[test]
    fn test_handle_state_transitions() {
        let handle = ExtensionHandle::new("test");

        assert!(handle.set_state(ExtensionState::CompatibilityChecked));
        assert_eq!(handle.state(), ExtensionState::CompatibilityChecked);

        assert!(handle.set_state(ExtensionState::Active));
        assert_eq!(handle.state(), ExtensionState::Active);
    }

    #[test]
    fn test_handle_rejects_illegal_transition() {
        let handle = ExtensionHandle::new("test");
        assert!(!handle.set_state(ExtensionState::Active));
        assert_eq!(handle.state(), ExtensionState::Uninitialized);
    }

    #[test]
    fn test_handle_clone_shares_state() {
        let handle1 = ExtensionHandle::new("shared");
        let handle2 = handle1.clone();

        handle1.set_state(ExtensionState::CompatibilityChecked);
        assert_eq!(handle2.state(), ExtensionState::CompatibilityChecked);

        handle2.set_state(ExtensionState::Disabled("too old".to_string()));
        assert_eq!(
            handle1.state(),
            ExtensionState::Disabled("too old".to_string())
        );
    }

    #[test]
    fn test_handle_subscribe() {
        let handle = ExtensionHandle::new("test");
        let mut rx = handle.subscribe();

        assert_eq!(*rx.borrow(), ExtensionState::Uninitialized);

        handle.set_state(ExtensionState::CompatibilityChecked);
        assert_eq!(
            *rx.borrow_and_update(),
            ExtensionState::CompatibilityChecked
        );
    }

    #[test]
    fn test_handle_debug() {
        let handle = ExtensionHandle::new("debug-test");
        let debug = format!("{:?}", handle);
        assert!(debug.contains("debug-test"));
        assert!(debug.contains("ExtensionHandle"));
    }

    // Compile-time check: ExtensionHandle must be Send + Sync
    fn _assert_send_sync<T: Send + Sync>() {}
    #[test]
    fn test_handle_send_sync() {
        _assert_send_sync::<ExtensionHandle>();
        _assert_send_sync::<ExtensionState>();
    }
}
