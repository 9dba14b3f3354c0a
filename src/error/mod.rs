//! Error module for the Segment Trie crate.
//!
//! Trie operations themselves are total: absence is reported through
//! `Option`, never through an error. The types here cover everything around
//! the trie, such as loading configuration and data files.

use thiserror::Error;

pub mod config;

/// Result type alias used throughout the Segment Trie crate.
pub type SegtrieResult<T> = Result<T, SegtrieError>;

/// Core error enum for the Segment Trie crate.
#[derive(Error, Debug)]
pub enum SegtrieError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing errors.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Data file with an extension the loader does not understand.
    #[error("Unsupported data file format: {0}")]
    UnsupportedFormat(String),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
