//! Error types emitted by the nextplate CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use nextplate_core::ParsePreferenceError;
use nextplate_data::DataError;
use nextplate_overlay::OverlayError;
use nextplate_scorer::ScoreError;
use thiserror::Error;

/// Errors emitted by the nextplate CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A preference flag did not name a known level.
    #[error("invalid --{field}: {source}")]
    InvalidPreference {
        /// Flag name.
        field: &'static str,
        /// Parse failure.
        #[source]
        source: ParsePreferenceError,
    },
    /// The data directory does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingDataDir {
        /// Flag name.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// The data directory exists but is not a directory.
    #[error("{field} path {path:?} is not a directory")]
    DataDirNotDirectory {
        /// Flag name.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// The data directory could not be inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectDataDir {
        /// Flag name.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
        /// I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Loading the CSV tables failed.
    #[error("failed to load dataset: {0}")]
    LoadDataset(#[source] Box<DataError>),
    /// Scoring failed.
    #[error("scoring failed: {0}")]
    Score(#[from] ScoreError),
    /// Building overlays failed.
    #[error("failed to build overlays: {0}")]
    Overlay(#[from] OverlayError),
    /// Serialising the output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
