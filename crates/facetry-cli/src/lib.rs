//! # facetry-cli
//!
//! Command-line driver for the post-status extension.
//!
//! This crate wires a configured host, state catalog, and extension
//! together and exposes them as subcommands:
//! - Compatibility check (`check`)
//! - Facet source listing (`sources`)
//! - Lifecycle state listing (`states`)
//! - Row enrichment and scope expansion (`enrich`, `expand`, `pass`)
//! - Configuration management (`config path|show|init`)

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Cli, Command, ConfigAction};
pub use config::{FacetryConfig, HostConfig};
pub use error::{Error, Result};
