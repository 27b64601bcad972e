//! Label enums shared by records and the summary document.
//!
//! Enums serialize in `snake_case` except [`DayOfWeek`], which keeps the
//! English day names the rendering stage prints directly.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Sender
// ---------------------------------------------------------------------------

/// Author of a chat message.
///
/// Unrecognised or missing senders deserialize as [`Sender::Unknown`] instead
/// of failing the message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    Human,
    Assistant,
    #[default]
    Unknown,
}

impl Sender {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Assistant => "assistant",
            Self::Unknown => "unknown",
        }
    }
}

impl<'de> Deserialize<'de> for Sender {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match raw.as_ref().and_then(serde_json::Value::as_str) {
            Some("human") => Self::Human,
            Some("assistant") => Self::Assistant,
            _ => Self::Unknown,
        })
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DayOfWeek
// ---------------------------------------------------------------------------

/// Day of the week, Monday first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All days in bucket order.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Zero-based bucket index, Monday = 0.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(day: chrono::Weekday) -> Self {
        Self::ALL[day.num_days_from_monday() as usize]
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DayPeriod / Chronotype
// ---------------------------------------------------------------------------

/// Coarse part of the day a local hour falls into.
///
/// ```text
/// morning     05-11
/// afternoon   12-17
/// evening     18-21
/// late_night  22-04
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
    LateNight,
}

impl DayPeriod {
    /// Periods in tie-break order.
    pub const ALL: [Self; 4] = [
        Self::Morning,
        Self::Afternoon,
        Self::Evening,
        Self::LateNight,
    ];

    /// Period containing `hour` (0-23). Hours past 23 wrap.
    #[must_use]
    pub const fn of_hour(hour: u32) -> Self {
        match hour % 24 {
            5..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            18..=21 => Self::Evening,
            _ => Self::LateNight,
        }
    }

    /// Chronotype label for users whose activity peaks in this period.
    #[must_use]
    pub const fn chronotype(self) -> &'static str {
        match self {
            Self::Morning => "Morning Person (5am-noon)",
            Self::Afternoon => "Afternoon Worker (noon-6pm)",
            Self::Evening => "Evening Thinker (6pm-10pm)",
            Self::LateNight => "Night Owl (10pm-4am)",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::LateNight => "late_night",
        }
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// UsageTrend
// ---------------------------------------------------------------------------

/// Direction of monthly usage across the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum UsageTrend {
    Increasing,
    Decreasing,
}

impl UsageTrend {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
        }
    }
}

impl fmt::Display for UsageTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CommunicationStyle
// ---------------------------------------------------------------------------

/// How terse the human side of the archive is relative to the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationStyle {
    Concise,
    Conversational,
}

impl CommunicationStyle {
    /// Ratio of assistant words to human words above which the human is concise.
    pub const CONCISE_RATIO: f64 = 5.0;

    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > Self::CONCISE_RATIO {
            Self::Concise
        } else {
            Self::Conversational
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Concise => "concise",
            Self::Conversational => "conversational",
        }
    }
}

impl fmt::Display for CommunicationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn sender_tolerates_unknown_values() {
        let parsed: Vec<Sender> =
            serde_json::from_str(r#"["human", "assistant", "system", null, 3]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                Sender::Human,
                Sender::Assistant,
                Sender::Unknown,
                Sender::Unknown,
                Sender::Unknown
            ]
        );
    }

    #[test]
    fn weekday_conversion_is_monday_first() {
        assert_eq!(DayOfWeek::from(chrono::Weekday::Mon), DayOfWeek::Monday);
        assert_eq!(DayOfWeek::from(chrono::Weekday::Sun), DayOfWeek::Sunday);
        assert_eq!(DayOfWeek::Sunday.index(), 6);
        assert!(DayOfWeek::Saturday.is_weekend());
        assert!(!DayOfWeek::Friday.is_weekend());
    }

    #[test]
    fn weekday_serializes_as_english_name() {
        assert_eq!(
            serde_json::to_string(&DayOfWeek::Wednesday).unwrap(),
            "\"Wednesday\""
        );
    }

    #[rstest]
    #[case(5, DayPeriod::Morning)]
    #[case(11, DayPeriod::Morning)]
    #[case(12, DayPeriod::Afternoon)]
    #[case(17, DayPeriod::Afternoon)]
    #[case(18, DayPeriod::Evening)]
    #[case(21, DayPeriod::Evening)]
    #[case(22, DayPeriod::LateNight)]
    #[case(0, DayPeriod::LateNight)]
    #[case(4, DayPeriod::LateNight)]
    fn hour_periods(#[case] hour: u32, #[case] period: DayPeriod) {
        assert_eq!(DayPeriod::of_hour(hour), period);
    }

    #[test]
    fn communication_style_threshold_is_exclusive() {
        assert_eq!(
            CommunicationStyle::from_ratio(5.0),
            CommunicationStyle::Conversational
        );
        assert_eq!(
            CommunicationStyle::from_ratio(5.1),
            CommunicationStyle::Concise
        );
    }
}
