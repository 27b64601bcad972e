//! First-match keyword topic classification.

use std::collections::{BTreeMap, HashMap};

use wrap_config::TopicsConfig;
use wrap_core::derived::DerivedConversation;
use wrap_core::summary::{ConversationRef, TopicCount, TopicSummary};

/// A compiled, ordered rule table.
///
/// Keywords are lowercased once up front; names are lowercased per lookup.
#[derive(Debug, Clone)]
pub struct TopicClassifier {
    rules: Vec<CompiledRule>,
    other_label: String,
}

#[derive(Debug, Clone)]
struct CompiledRule {
    label: String,
    keywords: Vec<String>,
}

impl TopicClassifier {
    #[must_use]
    pub fn new(config: &TopicsConfig) -> Self {
        let rules = config
            .rules
            .iter()
            .map(|rule| CompiledRule {
                label: rule.label.clone(),
                keywords: rule
                    .keywords
                    .iter()
                    .map(|keyword| keyword.trim().to_lowercase())
                    .filter(|keyword| !keyword.is_empty())
                    .collect(),
            })
            .collect();

        Self {
            rules,
            other_label: config.other_label.clone(),
        }
    }

    /// Label of the first rule with a keyword contained in `name`, or the
    /// other label.
    #[must_use]
    pub fn classify(&self, name: &str) -> &str {
        let name = name.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|keyword| name.contains(keyword)))
            .map_or(self.other_label.as_str(), |rule| rule.label.as_str())
    }

    #[must_use]
    pub fn other_label(&self) -> &str {
        &self.other_label
    }

    /// Position used to break count ties: first rule index for a label, the
    /// other label after every rule.
    fn rank(&self, label: &str) -> usize {
        self.rules
            .iter()
            .position(|rule| rule.label == label)
            .unwrap_or(self.rules.len())
    }
}

/// Count labels, pick the top ones, and keep a few examples of each.
#[must_use]
pub fn summarize_topics(
    conversations: &[DerivedConversation],
    classifier: &TopicClassifier,
    config: &TopicsConfig,
) -> TopicSummary {
    let mut tallies: HashMap<&str, u64> = HashMap::new();
    let mut examples: BTreeMap<String, Vec<ConversationRef>> = BTreeMap::new();

    for conversation in conversations {
        *tallies.entry(conversation.topic.as_str()).or_default() += 1;

        let bucket = examples.entry(conversation.topic.clone()).or_default();
        if bucket.len() < config.examples_per_topic {
            bucket.push(ConversationRef {
                name: conversation.name.clone(),
                date: conversation.date,
            });
        }
    }
    examples.retain(|_, refs| !refs.is_empty());

    let mut counts = tallies
        .into_iter()
        .map(|(topic, count)| TopicCount {
            topic: topic.to_string(),
            count,
        })
        .collect::<Vec<_>>();
    counts.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| classifier.rank(&a.topic).cmp(&classifier.rank(&b.topic)))
            .then_with(|| a.topic.cmp(&b.topic))
    });

    let other_label = classifier.other_label();
    let other_count = counts
        .iter()
        .find(|entry| entry.topic == other_label)
        .map_or(0, |entry| entry.count);
    let top = counts
        .iter()
        .filter(|entry| entry.topic != other_label)
        .take(config.top_n)
        .cloned()
        .collect();

    TopicSummary {
        other_label: other_label.to_string(),
        counts,
        top,
        other_count,
        examples,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use wrap_config::TopicRule;

    use super::*;

    fn classifier() -> TopicClassifier {
        TopicClassifier::new(&TopicsConfig::default())
    }

    #[rstest]
    #[case("Help with Rust borrow checker", "Programming")]
    #[case("HELP WITH RUST", "Programming")]
    #[case("Sourdough recipe tweaks", "Food & Cooking")]
    #[case("Itinerary for Lisbon", "Travel")]
    #[case("", "Other")]
    #[case("Untitled", "Other")]
    fn default_rules_classify(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(classifier().classify(name), expected);
    }

    #[test]
    fn first_matching_rule_wins() {
        let config = TopicsConfig {
            rules: vec![
                TopicRule::new("Cooking", ["dinner"]),
                TopicRule::new("Family", ["family", "dinner"]),
            ],
            ..TopicsConfig::default()
        };
        let classifier = TopicClassifier::new(&config);
        assert_eq!(classifier.classify("Family dinner plans"), "Cooking");
        assert_eq!(classifier.classify("Family reunion"), "Family");
    }

    #[test]
    fn keywords_match_case_insensitively() {
        let config = TopicsConfig {
            rules: vec![TopicRule::new("Databases", ["PostgreSQL"])],
            ..TopicsConfig::default()
        };
        assert_eq!(
            TopicClassifier::new(&config).classify("tuning postgresql vacuum"),
            "Databases"
        );
    }

    #[test]
    fn empty_rule_table_labels_everything_other() {
        let config = TopicsConfig {
            rules: Vec::new(),
            ..TopicsConfig::default()
        };
        assert_eq!(TopicClassifier::new(&config).classify("anything"), "Other");
    }
}
