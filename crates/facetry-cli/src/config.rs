//! TOML configuration for the command-line driver.
//!
//! ```toml
//! [host]
//! name = "FacetHost"
//! version = "3.2.0"
//!
//! [extension]
//! label = "Post Status"
//! min_host_version = "3.0.0"
//!
//! [[states]]
//! id = "publish"
//! label = "Published"
//! visibility = "public"
//! ```
//!
//! Every section is optional. Without `[[states]]` the built-in post states
//! are used.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use facetry_core::LifecycleState;
use facetry_index::{CachedStateCatalog, HostInfo, StateCatalog, StaticStateSource};
use facetry_status::ExtensionConfig;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Project name, used for the config directory.
pub const PROJECT_NAME: &str = "facetry";

/// Config file name inside the project config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// ============================================================================
// Sections
// ============================================================================

/// The `[host]` section: the host indexer's readiness signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Host product name.
    #[serde(default = "default_host_name")]
    pub name: String,

    /// Installed host version. Absent means the host is not installed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

fn default_host_name() -> String {
    "FacetHost".to_string()
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            name: default_host_name(),
            version: None,
        }
    }
}

impl HostConfig {
    /// The readiness signal this section describes.
    pub fn host_info(&self) -> HostInfo {
        HostInfo {
            name: self.name.clone(),
            version: self.version.clone(),
        }
    }
}

/// Complete configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetryConfig {
    /// Host indexer.
    #[serde(default)]
    pub host: HostConfig,

    /// Extension settings.
    #[serde(default)]
    pub extension: ExtensionConfig,

    /// Lifecycle state catalog.
    #[serde(default = "LifecycleState::builtin_post_states")]
    pub states: Vec<LifecycleState>,
}

impl Default for FacetryConfig {
    fn default() -> Self {
        Self {
            host: HostConfig::default(),
            extension: ExtensionConfig::default(),
            states: LifecycleState::builtin_post_states(),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

impl FacetryConfig {
    /// Default config path: `<config dir>/facetry/config.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(PROJECT_NAME).join(CONFIG_FILE_NAME))
    }

    /// Resolve the config path from an explicit value or the default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(p) => Some(PathBuf::from(p)),
            None => Self::default_config_path(),
        }
    }

    /// Load the configuration, falling back to defaults when no file exists.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) => {
                log::debug!("No config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| facetry_core::Error::io_with_path(e, path))?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::ConfigParse { source, .. } => Error::ConfigParse {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })
    }

    /// Parse config text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::ConfigParse {
            path: "<string>".to_string(),
            source,
        })
    }

    /// Render as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// A cached catalog over the configured states.
    pub fn catalog(&self) -> Arc<dyn StateCatalog> {
        Arc::new(CachedStateCatalog::new(StaticStateSource::new(
            self.states.clone(),
        )))
    }
}

// ============================================================================
// Tests
// ============================================================================
