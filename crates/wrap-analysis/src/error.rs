//! Pipeline error types.
//!
//! Only whole-file problems are errors. Individual records that fail to parse
//! are skipped and counted in the summary instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A required export file is absent.
    #[error("Required input file not found: {path}")]
    MissingInput { path: String },

    /// Reading an input file failed.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// An input file is not valid JSON.
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// An input file parsed but its top level is not an array of records.
    #[error("Expected a JSON array at the top level of {path}, found {found}")]
    NotAnArray { path: String, found: &'static str },

    /// Writing an output file failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Serializing an output document failed.
    #[error("Failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
