//! The summary document: the only artifact the pipeline publishes.
//!
//! The rendering stage reads `summary.json` and relies on this shape, so the
//! document is also exported as a JSON Schema (`wrapped schema`). Values are
//! kept unrounded; formatting is the renderer's job. The one exception is
//! [`TimePatterns::weekend_percentage`], which is a display percentage.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{CommunicationStyle, DayOfWeek, DayPeriod, UsageTrend};

/// Aggregate statistics for one target year.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Summary {
    pub context: RunContext,
    pub headline: Headline,
    pub skipped: SkippedRecords,
    pub averages: Averages,
    /// Conversations per local `YYYY-MM`.
    pub conversations_by_month: BTreeMap<String, u64>,
    /// 24 buckets of conversation creation hours.
    pub conversations_by_hour: Vec<HourCount>,
    /// 7 buckets of conversation creation days, Monday first.
    pub conversations_by_weekday: Vec<WeekdayCount>,
    /// 24 buckets of message hours.
    pub messages_by_hour: Vec<HourCount>,
    /// 7 buckets of message days, Monday first.
    pub messages_by_weekday: Vec<WeekdayCount>,
    pub peak_usage: PeakUsage,
    pub time_patterns: TimePatterns,
    pub topics: TopicSummary,
    pub lengths: LengthBuckets,
    /// Longest conversations by message count.
    pub longest_conversations: Vec<ConversationHighlight>,
    pub records: Records,
    pub comparisons: Comparisons,
    pub verbosity: Option<Verbosity>,
    pub energy: EnergyEstimate,
    pub projects: Vec<ProjectSummary>,
}

/// Parameters the summary was computed with.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RunContext {
    pub year: i32,
    /// Fixed local offset, e.g. `-06:00`.
    pub utc_offset: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Headline {
    pub conversations: u64,
    pub messages: u64,
    pub human_messages: u64,
    pub assistant_messages: u64,
    pub human_words: u64,
    pub assistant_words: u64,
    pub total_words: u64,
    pub projects: u64,
    pub memories: u64,
}

/// Records left out of the aggregates, by reason.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SkipCounts {
    /// Array elements that were not a usable record.
    pub unparseable: u64,
    /// Missing or unreadable creation timestamp.
    pub invalid_timestamp: u64,
    /// Created outside the target year.
    pub out_of_range: u64,
}

impl SkipCounts {
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.unparseable + self.invalid_timestamp + self.out_of_range
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SkippedRecords {
    pub conversations: SkipCounts,
    pub projects: SkipCounts,
}

/// Per-conversation averages; zero when there are no conversations.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Averages {
    pub messages_per_conversation: f64,
    pub human_words_per_conversation: f64,
    pub assistant_words_per_conversation: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HourCount {
    pub hour: u32,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WeekdayCount {
    pub day: DayOfWeek,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PeakHour {
    pub hour: u32,
    /// 12-hour clock label, e.g. `2 PM`.
    pub label: String,
    pub count: u64,
}

/// Busiest message hour and weekday; absent without messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PeakUsage {
    pub hour: Option<PeakHour>,
    pub weekday: Option<WeekdayCount>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PeriodBreakdown {
    pub morning: u64,
    pub afternoon: u64,
    pub evening: u64,
    pub late_night: u64,
}

impl PeriodBreakdown {
    #[must_use]
    pub const fn get(&self, period: DayPeriod) -> u64 {
        match period {
            DayPeriod::Morning => self.morning,
            DayPeriod::Afternoon => self.afternoon,
            DayPeriod::Evening => self.evening,
            DayPeriod::LateNight => self.late_night,
        }
    }

    pub fn add(&mut self, period: DayPeriod, count: u64) {
        match period {
            DayPeriod::Morning => self.morning += count,
            DayPeriod::Afternoon => self.afternoon += count,
            DayPeriod::Evening => self.evening += count,
            DayPeriod::LateNight => self.late_night += count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TimePatterns {
    pub periods: PeriodBreakdown,
    /// Period with the most messages; absent without messages.
    pub peak_period: Option<DayPeriod>,
    /// Human-readable label for `peak_period`.
    pub chronotype: Option<String>,
    /// Share of messages sent on Saturday or Sunday, one decimal.
    pub weekend_percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TopicCount {
    pub topic: String,
    pub count: u64,
}

/// A conversation reference used in example lists.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConversationRef {
    pub name: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TopicSummary {
    /// Label used for conversations no rule matched.
    pub other_label: String,
    /// Every label with at least one conversation, most frequent first.
    pub counts: Vec<TopicCount>,
    /// Most frequent labels excluding the other label.
    pub top: Vec<TopicCount>,
    pub other_count: u64,
    /// First few conversations of each label, in input order.
    pub examples: BTreeMap<String, Vec<ConversationRef>>,
}

/// Conversations bucketed by message count.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LengthBuckets {
    /// 4 messages or fewer.
    pub quick_chats: u64,
    /// 5 to 20 messages.
    pub medium: u64,
    /// More than 20 messages.
    pub deep_dives: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConversationHighlight {
    pub name: String,
    pub date: NaiveDate,
    pub messages: u64,
    pub human_words: u64,
    pub assistant_words: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MonthCount {
    pub month: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Records {
    pub busiest_month: Option<MonthCount>,
    /// Absent with fewer than two active months.
    pub usage_trend: Option<UsageTrend>,
    pub longest_conversation: Option<ConversationHighlight>,
    /// Head of `longest_conversations` for headline display.
    pub top_longest: Vec<ConversationHighlight>,
}

/// Word totals expressed in everyday units.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Comparisons {
    pub novels: f64,
    pub pages: f64,
    pub audiobook_hours: f64,
    pub great_gatsbys: f64,
    /// Human words only.
    pub tweets: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Verbosity {
    /// Assistant words per human word.
    pub assistant_ratio: f64,
    pub style: CommunicationStyle,
}

/// Estimated environmental cost of the year's usage.
///
/// Every quantity is linear in (`standard_conversations`,
/// `reasoning_conversations`).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EnergyEstimate {
    pub standard_conversations: u64,
    pub reasoning_conversations: u64,
    /// `min(human messages, assistant messages)`, informational.
    pub message_pairs: u64,
    pub operational_kwh: f64,
    pub electricity_co2_kg: f64,
    pub operational_co2_kg: f64,
    pub training_co2_kg: f64,
    pub total_co2_kg: f64,
    pub total_co2_tons: f64,
    pub offset_cost_usd: f64,
    pub water_liters: f64,
    pub car_miles_equivalent: f64,
    pub flight_miles_equivalent: f64,
    pub showers_equivalent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectSummary {
    pub name: String,
    pub description: String,
    pub created: Option<NaiveDate>,
    pub updated: Option<NaiveDate>,
    pub docs_count: u64,
}
