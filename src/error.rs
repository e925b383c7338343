use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the board game engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// Dataset absent at every candidate location
    #[error("Dataset not found (searched: {})", display_paths(.searched))]
    DatasetNotFound { searched: Vec<PathBuf> },

    /// Allow-list absent at its configured location
    #[error("Allow-list not found: {}", .0.display())]
    AllowListNotFound(PathBuf),

    /// Filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited file errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias
pub type Result<T> = std::result::Result<T, EngineError>;
