//! Startup errors.
//!
//! Everything that can go wrong at runtime is normalized locally (stale
//! timers, out-of-range levels, non-positive durations). Only a broken setup
//! is fatal, and it is reported through [`SetupError`].

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("missing required collaborator: {0}")]
    MissingCollaborator(&'static str),
    #[error("level catalog has no levels")]
    EmptyCatalog,
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse level catalog: {0}")]
    Catalog(#[from] serde_json::Error),
    #[error("failed to load config file: {0}")]
    Config(String),
}
