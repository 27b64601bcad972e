//! Keyword-to-topic rule table.
//!
//! Rules are ordered; the first rule with a keyword contained in the
//! conversation name (case-insensitively) decides the label. A rule table in
//! TOML replaces the built-in table entirely:
//!
//! ```toml
//! [[topics.rules]]
//! label = "Programming"
//! keywords = ["rust", "python", "borrow checker"]
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_top_n() -> usize {
    7
}

const fn default_examples_per_topic() -> usize {
    10
}

fn default_other_label() -> String {
    String::from("Other")
}

/// One ordered `(keywords, label)` rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TopicRule {
    pub label: String,
    pub keywords: Vec<String>,
}

impl TopicRule {
    pub fn new<I, S>(label: &str, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.to_string(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

fn default_rules() -> Vec<TopicRule> {
    vec![
        TopicRule::new(
            "Programming",
            [
                "rust", "borrow checker", "code", "coding", "python", "javascript", "typescript",
                "script", "api", "css", "sql", "regex", "debug", "compile", "spreadsheet",
                "formula",
            ],
        ),
        TopicRule::new(
            "Writing",
            [
                "essay", "draft", "rewrite", "blog", "email", "tagline", "story", "poem",
                "cover letter",
            ],
        ),
        TopicRule::new(
            "Work & Career",
            [
                "resume", "interview", "meeting", "proposal", "client", "strategy", "pricing",
                "marketing", "presentation", "consulting",
            ],
        ),
        TopicRule::new(
            "Health & Fitness",
            [
                "fitness", "workout", "cycling", "running", "sleep", "nutrition", "diet",
                "supplement", "recovery",
            ],
        ),
        TopicRule::new(
            "Food & Cooking",
            [
                "recipe", "cook", "dinner", "lunch", "brunch", "restaurant", "coffee", "cocktail",
                "bake",
            ],
        ),
        TopicRule::new(
            "Family & Parenting",
            ["toddler", "kid", "child", "parenting", "family", "school"],
        ),
        TopicRule::new(
            "Finance",
            ["budget", "tax", "invest", "salary", "insurance", "mortgage"],
        ),
        TopicRule::new(
            "Travel",
            ["trip", "travel", "flight", "hotel", "itinerary", "vacation"],
        ),
        TopicRule::new(
            "Learning",
            ["explain", "history", "philosophy", "etymology", "what is", "meaning"],
        ),
    ]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TopicsConfig {
    /// Label for conversations no rule matches.
    #[serde(default = "default_other_label")]
    pub other_label: String,

    /// How many labels the summary lists as top topics.
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Example conversations kept per label.
    #[serde(default = "default_examples_per_topic")]
    pub examples_per_topic: usize,

    #[serde(default = "default_rules")]
    pub rules: Vec<TopicRule>,
}

impl Default for TopicsConfig {
    fn default() -> Self {
        Self {
            other_label: default_other_label(),
            top_n: default_top_n(),
            examples_per_topic: default_examples_per_topic(),
            rules: default_rules(),
        }
    }
}

impl TopicsConfig {
    /// Check labels and keywords are usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a blank other label, a rule with
    /// a blank label or no keywords, a blank keyword, or a rule reusing the
    /// other label.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.other_label.trim().is_empty() {
            return Err(ConfigError::invalid("topics.other_label", "must not be empty"));
        }

        for (index, rule) in self.rules.iter().enumerate() {
            let field = format!("topics.rules[{index}]");
            if rule.label.trim().is_empty() {
                return Err(ConfigError::invalid(field, "label must not be empty"));
            }
            if rule.label == self.other_label {
                return Err(ConfigError::invalid(
                    field,
                    format!("label '{}' is reserved for unmatched conversations", rule.label),
                ));
            }
            if rule.keywords.is_empty() {
                return Err(ConfigError::invalid(field, "needs at least one keyword"));
            }
            if rule.keywords.iter().any(|keyword| keyword.trim().is_empty()) {
                return Err(ConfigError::invalid(field, "keywords must not be blank"));
            }
        }

        Ok(())
    }
}
