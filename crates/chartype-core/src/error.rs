//! Error types for the chartype classification pipeline.

use thiserror::Error;

/// Errors raised while classifying the strings of one batch.
///
/// Malformed UTF-8 and missing inputs are not errors; the only failure a
/// classification can hit is running out of memory.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("Allocation failed: tried to reserve {bytes} bytes")]
    AllocationFailed { bytes: usize },
}

/// Errors from loading or validating batch configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {reason}")]
    Invalid { reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors that can abort a whole batch call.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Chunk starting at index {offset} failed: {source}")]
    ChunkFailed {
        offset: usize,
        #[source]
        source: ClassifyError,
    },

    #[error("Thread pool build failed: {0}")]
    ThreadPool(String),
}
