//! The aggregation pipeline: filter, derive, aggregate.

use chrono::NaiveDate;
use wrap_config::{EnergyConfig, ReportConfig, TopicsConfig, WrapConfig};
use wrap_core::derived::DerivedConversation;
use wrap_core::records::Project;
use wrap_core::summary::{
    Headline, PeakUsage, ProjectSummary, RunContext, SkippedRecords, Summary,
};
use wrap_core::time::{LocalOffset, parse_timestamp};

use crate::derive::derive_conversation;
use crate::distribution::{Histogram, TimeSlot, monthly};
use crate::energy::{EnergyInputs, estimate};
use crate::filter::{YearWindow, retain_in_year};
use crate::highlights;
use crate::load::Export;
use crate::topics::{TopicClassifier, summarize_topics};

/// Result of one run: the summary plus the derived records behind it.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub summary: Summary,
    pub conversations: Vec<DerivedConversation>,
}

/// A configured pipeline for one target year.
#[derive(Debug, Clone)]
pub struct Pipeline {
    window: YearWindow,
    assume_extended_reasoning: bool,
    classifier: TopicClassifier,
    topics: TopicsConfig,
    energy: EnergyConfig,
    report: ReportConfig,
}

impl Pipeline {
    #[must_use]
    pub fn new(config: &WrapConfig, year: i32) -> Self {
        Self {
            window: YearWindow::new(year, config.analysis.utc_offset),
            assume_extended_reasoning: config.analysis.assume_extended_reasoning,
            classifier: TopicClassifier::new(&config.topics),
            topics: config.topics.clone(),
            energy: config.energy.clone(),
            report: config.report.clone(),
        }
    }

    #[must_use]
    pub const fn window(&self) -> YearWindow {
        self.window
    }

    /// Run the whole aggregation over a loaded export. Pure: no I/O.
    #[must_use]
    pub fn run(&self, export: &Export) -> Analysis {
        let offset = self.window.offset;

        let (retained, mut conversation_skips) =
            retain_in_year(&export.conversations, |c| c.created_at.as_str(), self.window);
        conversation_skips.unparseable = export.unparseable_conversations;

        let (kept_projects, mut project_skips) =
            retain_in_year(&export.projects, |p| p.created_at.as_str(), self.window);
        project_skips.unparseable = export.unparseable_projects;

        let mut conversations = Vec::with_capacity(retained.len());
        let mut message_slots = Vec::new();
        for entry in &retained {
            let derivation =
                derive_conversation(entry.record, entry.created, offset, &self.classifier);
            conversations.push(derivation.conversation);
            message_slots.extend(derivation.message_slots);
        }

        tracing::info!(
            year = self.window.year,
            offset = %offset,
            retained = conversations.len(),
            out_of_range = conversation_skips.out_of_range,
            invalid_timestamp = conversation_skips.invalid_timestamp,
            "filtered conversations"
        );

        let conversation_histogram = Histogram::from_slots(conversations.iter().map(|c| TimeSlot {
            hour: c.hour,
            weekday: c.weekday,
        }));
        let message_histogram = Histogram::from_slots(message_slots);

        let headline = headline(&conversations, kept_projects.len(), export.memories.len());
        let longest = highlights::longest(&conversations, self.report.longest_limit);
        let conversations_by_month = monthly(conversations.iter().map(|c| c.month.as_str()));
        let records =
            highlights::records(&conversations_by_month, &longest, self.report.highlight_limit);

        let reasoning = if self.assume_extended_reasoning {
            headline.conversations
        } else {
            conversations.iter().filter(|c| c.extended_reasoning).count() as u64
        };
        let energy = estimate(
            EnergyInputs {
                standard_conversations: headline.conversations - reasoning,
                reasoning_conversations: reasoning,
                message_pairs: headline.human_messages.min(headline.assistant_messages),
            },
            &self.energy,
        );

        let projects = kept_projects
            .iter()
            .map(|entry| project_summary(entry.record, offset))
            .collect();

        let summary = Summary {
            context: RunContext {
                year: self.window.year,
                utc_offset: offset.to_string(),
            },
            skipped: SkippedRecords {
                conversations: conversation_skips,
                projects: project_skips,
            },
            averages: highlights::averages(&headline),
            conversations_by_month,
            conversations_by_hour: conversation_histogram.hour_counts(),
            conversations_by_weekday: conversation_histogram.weekday_counts(),
            messages_by_hour: message_histogram.hour_counts(),
            messages_by_weekday: message_histogram.weekday_counts(),
            peak_usage: PeakUsage {
                hour: message_histogram.peak_hour(),
                weekday: message_histogram.peak_weekday(),
            },
            time_patterns: message_histogram.time_patterns(),
            topics: summarize_topics(&conversations, &self.classifier, &self.topics),
            lengths: highlights::length_buckets(&conversations),
            longest_conversations: longest,
            records,
            comparisons: highlights::comparisons(&headline),
            verbosity: highlights::verbosity(&headline),
            energy,
            projects,
            headline,
        };

        Analysis {
            summary,
            conversations,
        }
    }
}

fn headline(conversations: &[DerivedConversation], projects: usize, memories: usize) -> Headline {
    let mut headline = Headline {
        conversations: conversations.len() as u64,
        projects: projects as u64,
        memories: memories as u64,
        ..Headline::default()
    };
    for conversation in conversations {
        headline.messages += conversation.messages;
        headline.human_messages += conversation.human_messages;
        headline.assistant_messages += conversation.assistant_messages;
        headline.human_words += conversation.human_words;
        headline.assistant_words += conversation.assistant_words;
        headline.total_words += conversation.total_words;
    }
    headline
}

fn project_summary(project: &Project, offset: LocalOffset) -> ProjectSummary {
    ProjectSummary {
        name: project.display_name().to_string(),
        description: project.description.clone(),
        created: local_date(&project.created_at, offset),
        updated: local_date(&project.updated_at, offset),
        docs_count: project.docs.len() as u64,
    }
}

fn local_date(value: &str, offset: LocalOffset) -> Option<NaiveDate> {
    parse_timestamp(value)
        .ok()
        .map(|instant| offset.to_local(instant).date_naive())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wrap_core::records::Conversation;

    use super::*;

    fn conversation(name: &str, created_at: &str, thinking: bool) -> Conversation {
        let content = if thinking {
            json!([{"type": "thinking", "thinking": "step"}, {"type": "text", "text": "ok"}])
        } else {
            json!([])
        };
        serde_json::from_value(json!({
            "uuid": name,
            "name": name,
            "created_at": created_at,
            "chat_messages": [
                {"sender": "human", "text": "one two", "created_at": created_at},
                {"sender": "assistant", "text": "three four five", "content": content,
                 "created_at": created_at}
            ]
        }))
        .unwrap()
    }

    fn export(conversations: Vec<Conversation>) -> Export {
        Export {
            conversations,
            ..Export::default()
        }
    }

    #[test]
    fn reasoning_conversations_are_detected_per_conversation() {
        let pipeline = Pipeline::new(&WrapConfig::default(), 2025);
        let analysis = pipeline.run(&export(vec![
            conversation("plain", "2025-04-01T15:00:00Z", false),
            conversation("deep", "2025-04-02T15:00:00Z", true),
        ]));
        let energy = analysis.summary.energy;
        assert_eq!(energy.standard_conversations, 1);
        assert_eq!(energy.reasoning_conversations, 1);
        assert_eq!(energy.message_pairs, 2);
    }

    #[test]
    fn assume_extended_reasoning_marks_everything() {
        let mut config = WrapConfig::default();
        config.analysis.assume_extended_reasoning = true;
        let analysis = Pipeline::new(&config, 2025).run(&export(vec![
            conversation("a", "2025-04-01T15:00:00Z", false),
            conversation("b", "2025-04-02T15:00:00Z", false),
        ]));
        assert_eq!(analysis.summary.energy.standard_conversations, 0);
        assert_eq!(analysis.summary.energy.reasoning_conversations, 2);
    }

    #[test]
    fn skip_counts_include_unparseable_records() {
        let mut input = export(vec![
            conversation("kept", "2025-06-01T00:00:00Z", false),
            conversation("early", "2024-12-31T12:00:00Z", false),
            conversation("broken", "yesterday", false),
        ]);
        input.unparseable_conversations = 2;

        let summary = Pipeline::new(&WrapConfig::default(), 2025).run(&input).summary;
        assert_eq!(summary.headline.conversations, 1);
        assert_eq!(summary.skipped.conversations.out_of_range, 1);
        assert_eq!(summary.skipped.conversations.invalid_timestamp, 1);
        assert_eq!(summary.skipped.conversations.unparseable, 2);
    }

    #[test]
    fn projects_are_filtered_and_memories_counted() {
        let input = Export {
            projects: vec![
                serde_json::from_value(json!({
                    "name": "Garden",
                    "created_at": "2025-01-01T07:00:00Z",
                    "updated_at": "2025-02-01T05:00:00Z",
                    "docs": [{}, {}]
                }))
                .unwrap(),
                serde_json::from_value(json!({
                    "name": "Old",
                    "created_at": "2024-05-01T00:00:00Z"
                }))
                .unwrap(),
            ],
            memories: vec![wrap_core::records::MemoryRecord(json!({"text": "likes tea"}))],
            ..Export::default()
        };

        let summary = Pipeline::new(&WrapConfig::default(), 2025).run(&input).summary;
        assert_eq!(summary.headline.projects, 1);
        assert_eq!(summary.headline.memories, 1);
        assert_eq!(summary.skipped.projects.out_of_range, 1);
        assert_eq!(
            summary.projects,
            vec![ProjectSummary {
                name: "Garden".to_string(),
                description: String::new(),
                created: NaiveDate::from_ymd_opt(2025, 1, 1),
                updated: NaiveDate::from_ymd_opt(2025, 1, 31),
                docs_count: 2,
            }]
        );
    }

    #[test]
    fn empty_export_gives_empty_summary() {
        let summary = Pipeline::new(&WrapConfig::default(), 2025)
            .run(&Export::default())
            .summary;
        assert_eq!(summary.headline, Headline::default());
        assert_eq!(summary.peak_usage, PeakUsage::default());
        assert!(summary.verbosity.is_none());
        assert!(summary.records.usage_trend.is_none());
        assert_eq!(summary.time_patterns.weekend_percentage, 0.0);
        assert_eq!(summary.context.utc_offset, "-06:00");
    }
}
