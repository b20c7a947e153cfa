//! Structured error types for the vector runner

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VectorError {
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("mode operation failed: {0}")]
    Mode(#[from] modecrypt_algorithms::Error),

    #[error("case {case}: missing required field: {field}")]
    MissingField { case: String, field: &'static str },

    #[error("case {case} ({direction}): expected {expected}, got {actual}")]
    Mismatch {
        case: String,
        direction: &'static str,
        expected: String,
        actual: String,
    },
}

pub type Result<T> = std::result::Result<T, VectorError>;
