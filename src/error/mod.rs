//! Error types for the Ozon Seller console.

use thiserror::Error;

/// Primary error type for all console operations.
#[derive(Error, Debug)]
pub enum OzonCliError {
    #[error("Invalid number format: '{value}' is not a valid {expected}")]
    InvalidNumberFormat {
        value: String,
        expected: &'static str,
    },

    #[error("Malformed JSON input: {0}")]
    MalformedJsonInput(#[source] serde_json::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(serde_json::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl OzonCliError {
    /// Create a coercion error for text that failed to parse as a number.
    pub fn invalid_number(value: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidNumberFormat {
            value: value.into(),
            expected,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, OzonCliError>;
