//! Target year and local time settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wrap_core::time::LocalOffset;

/// Offset used when none is configured: UTC-6.
fn default_utc_offset() -> LocalOffset {
    LocalOffset::from_seconds(-6 * 3600).unwrap_or_default()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Calendar year to summarise. Defaults to the current local year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Fixed offset timestamps are shifted to before bucketing.
    #[serde(default = "default_utc_offset")]
    pub utc_offset: LocalOffset,

    /// Treat every conversation as using extended reasoning for the energy
    /// estimate, regardless of what the export shows.
    #[serde(default)]
    pub assume_extended_reasoning: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            year: None,
            utc_offset: default_utc_offset(),
            assume_extended_reasoning: false,
        }
    }
}

impl AnalysisConfig {
    /// The configured year, or the year `now` falls in at the local offset.
    #[must_use]
    pub fn resolve_year(&self, now: DateTime<Utc>) -> i32 {
        self.year
            .unwrap_or_else(|| self.utc_offset.local_year(now))
    }
}
