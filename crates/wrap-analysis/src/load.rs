//! Reading export files from disk.
//!
//! `conversations.json` is required. `projects.json` and `memories.json` are
//! optional and count as empty when absent. Each file must hold a top-level
//! JSON array; array elements that are not usable records are skipped and
//! counted rather than failing the run.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use wrap_config::PathsConfig;
use wrap_core::records::{Conversation, MemoryRecord, Project};

use crate::error::AnalysisError;

/// Everything read from one export directory.
#[derive(Debug, Clone, Default)]
pub struct Export {
    pub conversations: Vec<Conversation>,
    pub projects: Vec<Project>,
    pub memories: Vec<MemoryRecord>,
    /// Conversation array elements that were not objects.
    pub unparseable_conversations: u64,
    /// Project array elements that were not objects.
    pub unparseable_projects: u64,
}

/// Load all export files named by `paths`.
///
/// # Errors
///
/// Returns `AnalysisError::MissingInput` when the conversations file is
/// absent, and a read/JSON/shape error when any present file is unusable.
pub fn load_export(paths: &PathsConfig) -> Result<Export, AnalysisError> {
    let conversations_path = paths.conversations_path();
    if !conversations_path.is_file() {
        return Err(AnalysisError::MissingInput {
            path: conversations_path.display().to_string(),
        });
    }

    let (conversations, unparseable_conversations) =
        parse_records::<Conversation>(read_array(&conversations_path)?);
    tracing::debug!(
        path = %conversations_path.display(),
        loaded = conversations.len(),
        unparseable = unparseable_conversations,
        "loaded conversations"
    );

    let (projects, unparseable_projects) = match read_optional_array(&paths.projects_path())? {
        Some(values) => parse_records::<Project>(values),
        None => (Vec::new(), 0),
    };

    let memories = read_optional_array(&paths.memories_path())?
        .unwrap_or_default()
        .into_iter()
        .map(MemoryRecord)
        .collect::<Vec<_>>();

    if unparseable_conversations + unparseable_projects > 0 {
        tracing::warn!(
            conversations = unparseable_conversations,
            projects = unparseable_projects,
            "skipped export records that are not JSON objects"
        );
    }

    Ok(Export {
        conversations,
        projects,
        memories,
        unparseable_conversations,
        unparseable_projects,
    })
}

/// Read a file that must contain a top-level JSON array.
///
/// # Errors
///
/// Returns `AnalysisError::Read`, `AnalysisError::Json`, or
/// `AnalysisError::NotAnArray`.
pub fn read_array(path: &Path) -> Result<Vec<Value>, AnalysisError> {
    let file = File::open(path).map_err(|source| AnalysisError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let value: Value =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| AnalysisError::Json {
            path: path.display().to_string(),
            source,
        })?;

    match value {
        Value::Array(items) => Ok(items),
        other => Err(AnalysisError::NotAnArray {
            path: path.display().to_string(),
            found: json_kind(&other),
        }),
    }
}

fn read_optional_array(path: &Path) -> Result<Option<Vec<Value>>, AnalysisError> {
    if !path.is_file() {
        tracing::warn!(path = %path.display(), "optional export file not found; counting it as empty");
        return Ok(None);
    }
    read_array(path).map(Some)
}

/// Deserialize each object element, counting the elements that are skipped.
fn parse_records<T: DeserializeOwned>(values: Vec<Value>) -> (Vec<T>, u64) {
    let mut records = Vec::with_capacity(values.len());
    let mut skipped = 0u64;

    for (index, value) in values.into_iter().enumerate() {
        if !value.is_object() {
            tracing::debug!(index, kind = json_kind(&value), "skipping non-object record");
            skipped += 1;
            continue;
        }
        match serde_json::from_value::<T>(value) {
            Ok(record) => records.push(record),
            Err(error) => {
                tracing::debug!(index, %error, "skipping unparseable record");
                skipped += 1;
            }
        }
    }

    (records, skipped)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
