//! Error types for facetry-cli

use thiserror::Error;

/// Result type alias for facetry-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in facetry-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from facetry-core
    #[error("Core error: {0}")]
    Core(#[from] facetry_core::Error),

    /// Malformed TOML configuration
    #[error("Failed to parse {path}: {source}")]
    ConfigParse {
        /// File being parsed
        path: String,
        /// Underlying parse error
        source: toml::de::Error,
    },

    /// Configuration could not be rendered as TOML
    #[error("Failed to render configuration: {0}")]
    ConfigRender(#[from] toml::ser::Error),

    /// Malformed JSON input
    #[error("Failed to read JSON from {path}: {source}")]
    Json {
        /// File being read
        path: String,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// The extension did not activate, so the command has nothing to do
    #[error("Extension inactive: {0}")]
    Inactive(String),
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Core(facetry_core::Error::Serialization(source))
    }
}
