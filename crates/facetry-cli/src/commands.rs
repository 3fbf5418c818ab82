//! Subcommand handlers.
//!
//! Each handler builds a [`Session`] from the loaded configuration, does its
//! work through the same host APIs an embedding application would use, and
//! prints JSON or TOML to stdout.

use std::path::{Path, PathBuf};

use facetry_core::{
    Error as CoreError, ExtensionState, FacetDescriptor, IndexRow, IndexerQueryArgs,
    LifecycleState, StateFilter,
};
use facetry_index::{IndexerHost, PassOutput, StateCatalog};
use facetry_status::{AdminNotice, NoticeBoard, NoticeSink, PostStatus};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::cli::{Command, ConfigAction};
use crate::config::{FacetryConfig, PROJECT_NAME};
use crate::error::{Error, Result};

// ============================================================================
// Session
// ============================================================================

/// A bootstrapped host with the extension attached (or disabled).
pub struct Session {
    /// The host indexer.
    pub host: IndexerHost,
    /// The extension handle.
    pub post_status: PostStatus,
    /// Settled extension state.
    pub state: ExtensionState,
    /// Notices raised during bootstrap.
    pub notices: Vec<AdminNotice>,
}

impl Session {
    /// Bootstrap the extension against the configured host and discover
    /// facet sources.
    pub fn start(config: &FacetryConfig) -> Result<Self> {
        let mut host = IndexerHost::new(config.host.host_info());
        let post_status = PostStatus::new(config.extension.clone(), config.catalog());
        let board = NoticeBoard::new();

        let state = post_status.bootstrap(&mut host, &board);
        let notices = board.drain();
        for notice in &notices {
            facetry_status::LogNoticeSink.emit(notice.clone());
        }
        host.discover_sources()?;
        tracing::debug!(state = %state, "session started");

        Ok(Self {
            host,
            post_status,
            state,
            notices,
        })
    }

    /// Fail unless the extension is active.
    pub fn require_active(&self) -> Result<()> {
        if self.state.is_active() {
            Ok(())
        } else {
            Err(Error::Inactive(self.state.to_string()))
        }
    }

    /// Facet sources registered under the extension's source type.
    pub fn sources(&self) -> Vec<FacetDescriptor> {
        self.host
            .registry()
            .list_for(&self.post_status.config().source_type)
    }

    /// Enrich rows through the host's enrichers.
    pub fn enrich(&self, rows: Vec<IndexRow>) -> Vec<IndexRow> {
        rows.into_iter()
            .map(|row| self.host.transform_row(row))
            .collect()
    }

    /// Expand query args through the host's transformers.
    pub fn expand(&self, args: IndexerQueryArgs) -> IndexerQueryArgs {
        self.host.transform_query_args(args)
    }

    /// Run a full pass.
    pub fn pass(&self, rows: Vec<IndexRow>) -> PassOutput {
        self.host.run_pass(IndexerQueryArgs::default(), rows)
    }
}

/// Outcome of `check`.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Host product name.
    pub host: String,
    /// Detected host version.
    pub detected: Option<String>,
    /// Required minimum.
    pub required: String,
    /// Settled extension state.
    pub state: String,
    /// Notices raised during bootstrap.
    pub notices: Vec<String>,
}

impl CheckReport {
    /// Summarize a session.
    pub fn from_session(session: &Session) -> Self {
        let info = session.host.info();
        Self {
            host: info.name.clone(),
            detected: info.version.clone(),
            required: session.post_status.gate().minimum().to_string(),
            state: session.state.to_string(),
            notices: session.notices.iter().map(|n| n.message.clone()).collect(),
        }
    }
}

/// States from the configured catalog.
pub fn list_states(config: &FacetryConfig, public_only: bool) -> Vec<LifecycleState> {
    let filter = if public_only {
        StateFilter::public()
    } else {
        StateFilter::all()
    };
    config.catalog().list_states(filter)
}

// ============================================================================
// Dispatch
// ============================================================================

/// Run a parsed subcommand.
pub fn run(config_path: Option<&str>, command: Command) -> Result<()> {
    let load = || FacetryConfig::load(config_path);
    match command {
        Command::Config { action } => handle_config_command(config_path, action),
        Command::Check => {
            let session = Session::start(&load()?)?;
            print_json(&CheckReport::from_session(&session))
        }
        Command::Sources => {
            let session = Session::start(&load()?)?;
            print_json(&session.sources())
        }
        Command::States { public } => print_json(&list_states(&load()?, public)),
        Command::Enrich { rows } => {
            let session = Session::start(&load()?)?;
            session.require_active()?;
            let rows: Vec<IndexRow> = read_json(Path::new(&rows))?;
            print_json(&session.enrich(rows))
        }
        Command::Expand { args } => {
            let session = Session::start(&load()?)?;
            session.require_active()?;
            let args = match args {
                Some(path) => read_json(Path::new(&path))?,
                None => IndexerQueryArgs::default(),
            };
            print_json(&session.expand(args))
        }
        Command::Pass { rows } => {
            let session = Session::start(&load()?)?;
            let rows: Vec<IndexRow> = read_json(Path::new(&rows))?;
            print_json(&session.pass(rows))
        }
    }
}

/// Read and parse a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        std::fs::read_to_string(path).map_err(|e| CoreError::io_with_path(e, path))?;
    serde_json::from_str(&content).map_err(|source| Error::Json {
        path: path.display().to_string(),
        source,
    })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ============================================================================
// Config commands
// ============================================================================

/// Handle a `config` subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Show => {
            let config = FacetryConfig::load(config_path)?;
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
        ConfigAction::Init { file, force } => {
            let target = file.as_deref().or(config_path);
            let path = cmd_config_init(target, force)?;
            println!("Config file created at {}", path.display());
            Ok(())
        }
    }
}

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    let path = FacetryConfig::resolve_config_path(config_path).ok_or_else(|| {
        CoreError::config("Could not determine config directory for this platform")
    })?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist, run `{PROJECT_NAME} config init` to create it)");
    }
    Ok(())
}

/// Write a default configuration file and return its path.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = FacetryConfig::resolve_config_path(file)
        .ok_or_else(|| CoreError::config("Could not determine config directory"))?;

    if path.exists() && !force {
        return Err(CoreError::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        ))
        .into());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CoreError::io_with_path(e, parent))?;
    }

    let toml_str = FacetryConfig::default().to_toml_string()?;
    std::fs::write(&path, toml_str).map_err(|e| CoreError::io_with_path(e, &path))?;
    Ok(path)
}

// ============================================================================
// Tests
// ============================================================================
