//! Unified application error type.
//! The annotation core never fails: errors only come from the edges
//! (snapshot files, config files, the watcher runtime) and all of them
//! are funnelled into AppError so the CLI can report them the same way.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Snapshot / config parsing
    // ---------------------------
    #[error("Invalid page snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Page errors
    // ---------------------------
    #[error("Attendance tables not found in {0}")]
    TablesNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Watcher errors
    // ---------------------------
    #[error("Watcher error: {0}")]
    Watch(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
