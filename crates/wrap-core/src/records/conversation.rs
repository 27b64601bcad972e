use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::enums::Sender;
use crate::lenient;
use crate::text::count_words;

/// Content block type carrying extended-reasoning output.
pub const THINKING_BLOCK: &str = "thinking";

/// Content block type carrying visible text.
pub const TEXT_BLOCK: &str = "text";

/// One conversation from `conversations.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conversation {
    #[serde(default, deserialize_with = "lenient::string")]
    pub uuid: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub created_at: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub updated_at: String,
    #[serde(default, deserialize_with = "lenient::vec")]
    pub chat_messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Whether any message carries a thinking block.
    #[must_use]
    pub fn uses_extended_reasoning(&self) -> bool {
        self.chat_messages
            .iter()
            .any(ChatMessage::uses_extended_reasoning)
    }
}

/// A single message inside a conversation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    #[serde(default, deserialize_with = "lenient::string")]
    pub uuid: String,
    #[serde(default)]
    pub sender: Sender,
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub created_at: String,
    #[serde(default, deserialize_with = "lenient::vec")]
    pub content: Vec<ContentBlock>,
}

impl ChatMessage {
    /// Visible text of the message.
    ///
    /// Falls back to the `text` content blocks when the flat `text` field is
    /// blank, as newer exports only populate `content`.
    #[must_use]
    pub fn visible_text(&self) -> Cow<'_, str> {
        if !self.text.trim().is_empty() {
            return Cow::Borrowed(&self.text);
        }
        let joined = self
            .content
            .iter()
            .filter(|block| block.kind == TEXT_BLOCK)
            .map(|block| block.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        Cow::Owned(joined)
    }

    #[must_use]
    pub fn word_count(&self) -> u64 {
        count_words(&self.visible_text())
    }

    #[must_use]
    pub fn uses_extended_reasoning(&self) -> bool {
        self.content.iter().any(|block| block.kind == THINKING_BLOCK)
    }
}

/// A typed content block (`text`, `thinking`, `tool_use`, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentBlock {
    #[serde(rename = "type", default, deserialize_with = "lenient::string")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub thinking: String,
}
