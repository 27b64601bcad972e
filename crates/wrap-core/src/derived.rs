//! Per-conversation values derived by the pipeline.

use chrono::{DateTime, FixedOffset, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::DayOfWeek;

/// A retained conversation with its derived fields.
///
/// One of these exists per conversation that survived the year filter. They
/// are written verbatim to `conversations.jsonl` when record output is on.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DerivedConversation {
    pub uuid: String,
    pub name: String,
    /// Creation time at the configured local offset.
    pub created_local: DateTime<FixedOffset>,
    pub date: NaiveDate,
    /// `YYYY-MM` of the local creation date.
    pub month: String,
    /// Local hour of creation, 0-23.
    pub hour: u32,
    pub weekday: DayOfWeek,
    pub messages: u64,
    pub human_messages: u64,
    pub assistant_messages: u64,
    pub human_words: u64,
    pub assistant_words: u64,
    /// Words across all messages, including ones with an unknown sender.
    pub total_words: u64,
    /// Seconds between the first and last parseable message timestamps.
    pub duration_seconds: i64,
    pub topic: String,
    pub extended_reasoning: bool,
}
