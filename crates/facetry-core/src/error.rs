//! Error types for facetry-core

use thiserror::Error;

/// Result type alias for facetry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while wiring facet sources into a host indexer.
///
/// Only [`Error::DuplicateKey`] is meant to surface at initialization. Every
/// other variant has a local fallback so that an indexing pass never aborts.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A facet with the same key is already registered for the source type.
    #[error("Facet '{key}' is already registered for source type '{source_type}'")]
    DuplicateKey {
        /// Source type the facet belongs to (e.g. "posts").
        source_type: String,
        /// Facet key that collided.
        key: String,
    },

    /// The lifecycle state identifier is unknown to the catalog.
    #[error("Lifecycle state not found: {id}")]
    StateNotFound {
        /// Identifier that was looked up.
        id: String,
    },

    /// The host indexer is missing or older than the required version.
    #[error("{}", incompatible_message(.required, .detected.as_deref()))]
    IncompatibleHost {
        /// Minimum host version the extension requires.
        required: String,
        /// Version reported by the host, if any.
        detected: Option<String>,
    },

    /// A version string could not be parsed.
    #[error("Invalid version '{input}': {reason}")]
    InvalidVersion {
        /// The offending input.
        input: String,
        /// What went wrong.
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error with the path that caused it
    #[error("I/O error at {}: {source}", .path.display())]
    IoPath {
        /// Path being accessed
        path: std::path::PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn incompatible_message(required: &str, detected: Option<&str>) -> String {
    match detected {
        Some(version) => {
            format!("Host indexer {version} is incompatible (requires {required} or above)")
        }
        None => format!("Host indexer is not installed (requires {required} or above)"),
    }
}

impl Error {
    /// Returns whether the failure has a defined fallback inside a pass.
    ///
    /// Duplicate registrations indicate a packaging bug and are the only
    /// non-recoverable kind.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::DuplicateKey { .. } => false,
            Error::StateNotFound { .. } => true,
            Error::IncompatibleHost { .. } => true,
            Error::InvalidVersion { .. } => true,
            Error::Config { .. } => false,
            Error::Io(_) | Error::IoPath { .. } => false,
            Error::Serialization(_) => false,
        }
    }

    /// Creates a duplicate registration error.
    pub fn duplicate_key(source_type: impl Into<String>, key: impl Into<String>) -> Self {
        Error::DuplicateKey {
            source_type: source_type.into(),
            key: key.into(),
        }
    }

    /// Creates an unknown lifecycle state error.
    pub fn state_not_found(id: impl Into<String>) -> Self {
        Error::StateNotFound { id: id.into() }
    }

    /// Creates an incompatible host error.
    pub fn incompatible_host(required: impl Into<String>, detected: Option<String>) -> Self {
        Error::IncompatibleHost {
            required: required.into(),
            detected,
        }
    }

    /// Creates an invalid version error.
    pub fn invalid_version(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidVersion {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path being accessed.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<std::path::Path>) -> Self {
        Error::IoPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
