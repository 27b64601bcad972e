use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of `memories.json`.
///
/// Memory exports have no stable shape; entries are kept verbatim and only
/// contribute to counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct MemoryRecord(pub Value);
