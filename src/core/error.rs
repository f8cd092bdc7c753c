//! Error types for the bouquet generator

use thiserror::Error;

/// Main error type for the crate.
///
/// Generation itself never fails; these variants cover the boundaries where
/// user-supplied text or files enter the system.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid season: {0}")]
    InvalidSeason(String),

    #[error("Config error: {0}")]
    Config(String),
}
