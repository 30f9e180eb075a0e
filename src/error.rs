//! Error type for the I/O-facing parts of jazik
//!
//! Domain outcomes (unknown lemmas, agreement failures, malformed session
//! state) are reported as values. Only loading and saving files goes through
//! `JazikError`.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum JazikError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not read {path:?}: {source}")]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Config write error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),
}

pub type Result<T> = std::result::Result<T, JazikError>;
