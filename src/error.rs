//! Unified error handling for platebench.

use thiserror::Error;

/// Errors produced while serving or running a benchmark.
#[derive(Debug, Error)]
pub enum PlateBenchError {
    /// Request body was not a valid benchmark request.
    #[error("{0}")]
    InvalidRequest(#[from] serde_json::Error),

    /// Binding or serving the HTTP listener failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The blocking benchmark task panicked or was cancelled.
    #[error("benchmark task failed: {0}")]
    Task(String),

    /// The async runtime could not be created.
    #[error("failed to create runtime: {0}")]
    Runtime(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PlateBenchError>;
