//! Host compatibility gate.
//!
//! Decides whether the extension may wire itself into the host indexer.
//! A missing or outdated host is not an error for the host process: the
//! extension degrades to a no-op and leaves one admin notice behind.

use std::fmt;

use facetry_core::{Error, HostVersion, Result};
use facetry_index::HostInfo;

use crate::notice::AdminNotice;

/// Outcome of a compatibility check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compatibility {
    /// The host is installed and recent enough.
    Compatible(HostVersion),
    /// The host published no version.
    Missing,
    /// The host is older than required, or its version is unreadable.
    Outdated {
        /// Version string the host published.
        detected: String,
    },
}

impl Compatibility {
    /// Returns `true` for [`Compatibility::Compatible`].
    pub fn is_compatible(&self) -> bool {
        matches!(self, Self::Compatible(_))
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compatible(v) => write!(f, "compatible ({v})"),
            Self::Missing => write!(f, "host missing"),
            Self::Outdated { detected } => write!(f, "host outdated ({detected})"),
        }
    }
}

/// Minimum-version check against the host indexer.
#[derive(Debug, Clone)]
pub struct CompatibilityGate {
    extension_name: String,
    minimum: HostVersion,
}

impl CompatibilityGate {
    /// Create a gate for the named extension.
    pub fn new(extension_name: impl Into<String>, minimum: HostVersion) -> Self {
        Self {
            extension_name: extension_name.into(),
            minimum,
        }
    }

    /// The minimum accepted host version.
    pub fn minimum(&self) -> &HostVersion {
        &self.minimum
    }

    /// Inspect the host's readiness signal.
    pub fn check(&self, host: &HostInfo) -> Compatibility {
        let Some(raw) = host.version.as_deref() else {
            return Compatibility::Missing;
        };
        match HostVersion::parse(raw) {
            Ok(version) if version.satisfies(&self.minimum) => Compatibility::Compatible(version),
            Ok(_) => Compatibility::Outdated {
                detected: raw.to_string(),
            },
            Err(e) => {
                log::warn!("{}: unreadable host version: {e}", self.extension_name);
                Compatibility::Outdated {
                    detected: raw.to_string(),
                }
            }
        }
    }

    /// Like [`check`](Self::check), as a `Result`.
    pub fn require(&self, host: &HostInfo) -> Result<HostVersion> {
        match self.check(host) {
            Compatibility::Compatible(version) => Ok(version),
            Compatibility::Missing => Err(Error::incompatible_host(self.minimum.as_str(), None)),
            Compatibility::Outdated { detected } => Err(Error::incompatible_host(
                self.minimum.as_str(),
                Some(detected),
            )),
        }
    }

    /// The admin notice for an incompatible outcome, `None` when compatible.
    pub fn notice(&self, host: &HostInfo, outcome: &Compatibility) -> Option<AdminNotice> {
        let mut message = format!(
            "{} requires {} {} or above to work.",
            self.extension_name, host.name, self.minimum
        );
        match outcome {
            Compatibility::Compatible(_) => return None,
            Compatibility::Missing => {
                message.push_str(&format!(
                    " {} doesn't seem to be installed on your site.",
                    host.name
                ));
            }
            Compatibility::Outdated { detected } => {
                message.push_str(&format!(" You currently have {} {detected}.", host.name));
            }
        }
        Some(AdminNotice::error(message))
    }
}

// ============================================================================
// Tests
// ============================================================================
