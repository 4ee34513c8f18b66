//! Error types for mods-display
//!
//! Formatting itself never fails: missing or empty MODS elements are simply
//! absent from the output. Errors only surface while reading XML or loading
//! configuration.

use thiserror::Error;

/// Main library error type
#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("No <mods> record found inside <modsCollection>")]
    EmptyCollection,

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for library operations
pub type DisplayResult<T> = Result<T, DisplayError>;
