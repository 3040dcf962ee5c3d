use std::path::PathBuf;

use thiserror::Error;

/// Error type that captures inventory, snapshot, and configuration failures.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Snapshot `{}` is empty or missing", .0.display())]
    EmptySnapshot(PathBuf),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, InventoryError>;

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] InventoryError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Could not write inventory snapshot to `{}`", .0.display())]
    SnapshotNotSaved(PathBuf),
}
