//! Raw export records as they appear in the export JSON files.
//!
//! Every field is optional on the wire. Missing, `null`, or wrongly typed
//! fields become empty values so one odd record never aborts a run; only a
//! record that is not a JSON object at all is rejected by the loader.

mod conversation;
mod memory;
mod project;

pub use conversation::{ChatMessage, ContentBlock, Conversation};
pub use memory::MemoryRecord;
pub use project::Project;
