//! Host version parsing and comparison.
//!
//! Versions are dotted numeric segments with optional pre-release or patch
//! markers, compared the way content platforms usually compare plugin
//! versions:
//!
//! ```text
//! 3.0.0-dev < 3.0.0-alpha < 3.0.0-beta2 < 3.0.0-RC1 < 3.0.0 < 3.0.0-pl1
//! ```
//!
//! When one version runs out of segments, the longer one is greater if its
//! next segment is a number or a patch marker, and smaller if it is a
//! pre-release word. So `3.0 < 3.0.0` and `3.0.0-beta < 3.0.0`.
//!
//! ```rust
//! use facetry_core::HostVersion;
//!
//! let min: HostVersion = "3.0.0".parse().unwrap();
//! let host: HostVersion = "2.5.0".parse().unwrap();
//! assert!(host < min);
//! assert!("3.0.0-beta".parse::<HostVersion>().unwrap() < min);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// One comparable piece of a version string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Segment {
    // Variant order is the comparison order.
    Unknown,
    Dev,
    Alpha,
    Beta,
    ReleaseCandidate,
    /// Past the last segment of the shorter version.
    End,
    Number(u64),
    Patch,
}

impl Segment {
    fn from_word(word: &str) -> Self {
        match word.to_ascii_lowercase().as_str() {
            "dev" => Self::Dev,
            "alpha" | "a" => Self::Alpha,
            "beta" | "b" => Self::Beta,
            "rc" => Self::ReleaseCandidate,
            "pl" | "p" => Self::Patch,
            _ => Self::Unknown,
        }
    }
}

/// A parsed host version.
#[derive(Debug, Clone)]
pub struct HostVersion {
    raw: String,
    segments: Vec<Segment>,
}

impl HostVersion {
    /// Parse a version string.
    ///
    /// The string must start with a digit.
    pub fn parse(input: &str) -> Result<Self> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(Error::invalid_version(input, "empty version"));
        }
        if !raw.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(Error::invalid_version(input, "must start with a digit"));
        }

        let mut segments = Vec::new();
        for part in raw.split(['.', '-', '_', '+']) {
            for token in split_alnum(part) {
                let segment = if token.starts_with(|c: char| c.is_ascii_digit()) {
                    let n = token.parse::<u64>().map_err(|e| {
                        Error::invalid_version(input, format!("bad segment '{token}': {e}"))
                    })?;
                    Segment::Number(n)
                } else {
                    Segment::from_word(token)
                };
                segments.push(segment);
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// Build a release version from numeric parts, e.g. `[3, 0, 0]`.
    pub fn from_parts(parts: &[u64]) -> Self {
        let raw = parts
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(".");
        Self {
            raw,
            segments: parts.iter().copied().map(Segment::Number).collect(),
        }
    }

    /// The version as originally written (trimmed).
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns `true` if this version is at least `minimum`.
    pub fn satisfies(&self, minimum: &HostVersion) -> bool {
        self >= minimum
    }
}

/// Split `"0beta2"` into `["0", "beta", "2"]`.
fn split_alnum(part: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut prev_digit: Option<bool> = None;

    for (i, c) in part.char_indices() {
        let is_digit = c.is_ascii_digit();
        if let Some(prev) = prev_digit
            && prev != is_digit
        {
            tokens.push(&part[start..i]);
            start = i;
        }
        prev_digit = Some(is_digit);
    }
    if start < part.len() {
        tokens.push(&part[start..]);
    }
    tokens
}

impl PartialEq for HostVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HostVersion {}

impl PartialOrd for HostVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HostVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        for i in 0..len {
            let a = self.segments.get(i).copied().unwrap_or(Segment::End);
            let b = other.segments.get(i).copied().unwrap_or(Segment::End);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl FromStr for HostVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for HostVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for HostVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        HostVersion::parse(&raw).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn v(s: &str) -> HostVersion {
        HostVersion::parse(s).unwrap()
    }

    #[test]
    fn test_numeric_ordering() {
        assert!(v("2.5.0") < v("3.0.0"));
        assert!(v("3.0.1") > v("3.0.0"));
        assert!(v("3.10.0") > v("3.9.9"));
        assert!(v("4") > v("3.99"));
    }

    #[test]
    fn test_shorter_version_is_lower() {
        assert!(v("3.0") < v("3.0.0"));
        assert!(v("3") < v("3.0"));
        assert!(!v("3.0").satisfies(&v("3.0.0")));
        assert_eq!(v("3.0"), v("3.0"));
    }

    #[test]
    fn test_shorter_version_against_suffix_words() {
        assert!(v("3.0.0-beta") < v("3.0.0"));
        assert!(v("3.0.0-RC1") < v("3.0.0"));
        assert!(v("3.0.0-pl1") > v("3.0.0"));
        assert!(v("3.0.0-beta") > v("3.0"));
    }

    #[test]
    fn test_prerelease_ordering() {
        assert!(v("3.0.0-dev") < v("3.0.0-alpha"));
        assert!(v("3.0.0-alpha") < v("3.0.0-beta"));
        assert!(v("3.0.0-beta") < v("3.0.0-RC1"));
        assert!(v("3.0.0-RC1") < v("3.0.0"));
        assert!(v("3.0.0") < v("3.0.0-pl1"));
        assert!(v("3.0.0beta2") > v("3.0.0beta1"));
    }

    #[test]
    fn test_unknown_words_sort_lowest() {
        assert!(v("3.0.0-snapshot") < v("3.0.0-dev"));
    }

    #[test]
    fn test_satisfies() {
        let min = v("3.0.0");
        assert!(v("3.0.0").satisfies(&min));
        assert!(v("3.2.1").satisfies(&min));
        assert!(!v("2.5.0").satisfies(&min));
        assert!(!v("3.0.0-beta").satisfies(&min));
    }

    #[test]
    fn test_from_parts() {
        let version = HostVersion::from_parts(&[3, 0, 0]);
        assert_eq!(version.as_str(), "3.0.0");
        assert_eq!(version, v("3.0.0"));
        assert!(version > v("3"));
        assert!(version > v("2.99"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(HostVersion::parse("").is_err());
        assert!(HostVersion::parse("   ").is_err());
        assert!(HostVersion::parse("latest").is_err());
        assert!(HostVersion::parse("99999999999999999999999").is_err());
    }

    #[test]
    fn test_display_keeps_raw() {
        assert_eq!(v(" 3.0.0-RC1 ").to_string(), "3.0.0-RC1");
        assert_eq!(v("2.5.0").as_str(), "2.5.0");
    }

    #[test]
    fn test_serde_as_string() {
        let version: HostVersion = serde_json::from_str("\"3.1\"").unwrap();
        assert_eq!(version, v("3.1"));
        assert_eq!(serde_json::to_string(&version).unwrap(), "\"3.1\"");
        assert!(serde_json::from_str::<HostVersion>("\"nope\"").is_err());
    }

    #[test]
    fn test_split_alnum() {
        assert_eq!(split_alnum("0beta2"), vec!["0", "beta", "2"]);
        assert_eq!(split_alnum("12"), vec!["12"]);
        assert!(split_alnum("").is_empty());
    }
}
