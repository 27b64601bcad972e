//! Limits on list-valued summary fields.

use serde::{Deserialize, Serialize};

const fn default_longest_limit() -> usize {
    20
}

const fn default_highlight_limit() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Entries kept in `longest_conversations`.
    #[serde(default = "default_longest_limit")]
    pub longest_limit: usize,

    /// Entries kept in `records.top_longest`.
    #[serde(default = "default_highlight_limit")]
    pub highlight_limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            longest_limit: default_longest_limit(),
            highlight_limit: default_highlight_limit(),
        }
    }
}
