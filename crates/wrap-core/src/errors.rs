//! Cross-cutting error types.
//!
//! Crate-specific errors (`ConfigError`, `AnalysisError`) live in their own
//! crates. The binary converges everything into `anyhow::Error`.

use thiserror::Error;

/// Errors that can be raised while interpreting export values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A timestamp string could not be parsed.
    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    /// A UTC offset string could not be parsed or is out of range.
    #[error("Invalid UTC offset '{value}': {reason}")]
    InvalidOffset { value: String, reason: String },
}
