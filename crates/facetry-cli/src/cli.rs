//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Facetry - post status facets for a faceted-search indexer
#[derive(Parser, Debug)]
#[command(name = "facetry")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "FACETRY_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the host compatibility check and report the extension state
    Check,
    /// List registered facet sources
    Sources,
    /// List lifecycle states
    States {
        /// Only list publicly visible states
        #[arg(long)]
        public: bool,
    },
    /// Attach display labels to index rows read from a JSON file
    Enrich {
        /// JSON array of index rows
        rows: String,
    },
    /// Expand indexer query args to every public lifecycle state
    Expand {
        /// JSON object of query args (defaults are used when omitted)
        args: Option<String>,
    },
    /// Run a full indexing pass over rows read from a JSON file
    Pass {
        /// JSON array of index rows
        rows: String,
    },
    /// Configuration management
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Write a default configuration file
    Init {
        /// Target file (defaults to the platform config directory)
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
