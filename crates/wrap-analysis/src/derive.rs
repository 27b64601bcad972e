//! Per-conversation derivation.

use chrono::{DateTime, Datelike, Timelike, Utc};
use wrap_core::derived::DerivedConversation;
use wrap_core::enums::{DayOfWeek, Sender};
use wrap_core::records::Conversation;
use wrap_core::time::{LocalOffset, parse_timestamp};

use crate::distribution::TimeSlot;
use crate::topics::TopicClassifier;

/// A derived conversation plus the local slots of its timestamped messages.
#[derive(Debug, Clone)]
pub struct Derivation {
    pub conversation: DerivedConversation,
    pub message_slots: Vec<TimeSlot>,
}

/// Derive counts, buckets, and the topic label for one retained conversation.
///
/// `created` is the already-parsed creation instant from the year filter.
#[must_use]
pub fn derive_conversation(
    record: &Conversation,
    created: DateTime<Utc>,
    offset: LocalOffset,
    classifier: &TopicClassifier,
) -> Derivation {
    let local = offset.to_local(created);

    let mut human_messages = 0u64;
    let mut assistant_messages = 0u64;
    let mut human_words = 0u64;
    let mut assistant_words = 0u64;
    let mut total_words = 0u64;
    let mut message_slots = Vec::with_capacity(record.chat_messages.len());
    let mut first_seen: Option<DateTime<Utc>> = None;
    let mut last_seen: Option<DateTime<Utc>> = None;

    for message in &record.chat_messages {
        let words = message.word_count();
        total_words += words;
        match message.sender {
            Sender::Human => {
                human_messages += 1;
                human_words += words;
            }
            Sender::Assistant => {
                assistant_messages += 1;
                assistant_words += words;
            }
            Sender::Unknown => {}
        }

        if let Ok(sent) = parse_timestamp(&message.created_at) {
            let local_sent = offset.to_local(sent);
            message_slots.push(TimeSlot {
                hour: local_sent.hour(),
                weekday: DayOfWeek::from(local_sent.weekday()),
            });
            first_seen = Some(first_seen.map_or(sent, |seen| seen.min(sent)));
            last_seen = Some(last_seen.map_or(sent, |seen| seen.max(sent)));
        }
    }

    let duration_seconds = match (first_seen, last_seen) {
        (Some(first), Some(last)) => (last - first).num_seconds(),
        _ => 0,
    };

    let conversation = DerivedConversation {
        uuid: record.uuid.clone(),
        name: record.name.clone(),
        created_local: local,
        date: local.date_naive(),
        month: local.format("%Y-%m").to_string(),
        hour: local.hour(),
        weekday: DayOfWeek::from(local.weekday()),
        messages: record.chat_messages.len() as u64,
        human_messages,
        assistant_messages,
        human_words,
        assistant_words,
        total_words,
        duration_seconds,
        topic: classifier.classify(&record.name).to_string(),
        extended_reasoning: record.uses_extended_reasoning(),
    };

    Derivation {
        conversation,
        message_slots,
    }
}
