//! Error types for Smartnotes

use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Enrichment gateway error
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// Not found error
    #[error("{0} not found: {1}")]
    NotFound(&'static str, i64),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Smartnotes operations
pub type Result<T> = std::result::Result<T, AppError>;
