//! Facetry post status facets, umbrella crate.
//!
//! This crate re-exports all Facetry components for convenience.
//! Use feature flags to enable the command-line driver.

#![doc = include_str!("../README.md")]

pub use facetry_core as core;
pub use facetry_index as index;
pub use facetry_status as status;

#[cfg(feature = "cli")]
pub use facetry_cli as cli;
