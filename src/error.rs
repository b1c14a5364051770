//! Application error types.

use thiserror::Error;

/// Application-level errors for Technograph.
///
/// Only failures that happen before the frame loop starts are surfaced here;
/// once the scene is running, bad data degrades to warnings and no-ops.
#[derive(Error, Debug)]
pub enum AppError {
    // Catalog errors
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Color(#[from] crate::models::ColorParseError),

    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    // Config errors
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}
