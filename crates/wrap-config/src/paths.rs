//! Input and output file locations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_input_dir() -> PathBuf {
    PathBuf::from("raw-exports")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("analysis")
}

fn default_conversations_file() -> String {
    String::from("conversations.json")
}

fn default_projects_file() -> String {
    String::from("projects.json")
}

fn default_memories_file() -> String {
    String::from("memories.json")
}

fn default_summary_file() -> String {
    String::from("summary.json")
}

fn default_records_file() -> String {
    String::from("conversations.jsonl")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Directory holding the unpacked export.
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Directory the summary is written to. Created when missing.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_conversations_file")]
    pub conversations_file: String,

    #[serde(default = "default_projects_file")]
    pub projects_file: String,

    #[serde(default = "default_memories_file")]
    pub memories_file: String,

    #[serde(default = "default_summary_file")]
    pub summary_file: String,

    /// JSON Lines file for per-conversation records.
    #[serde(default = "default_records_file")]
    pub records_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            conversations_file: default_conversations_file(),
            projects_file: default_projects_file(),
            memories_file: default_memories_file(),
            summary_file: default_summary_file(),
            records_file: default_records_file(),
        }
    }
}

impl PathsConfig {
    #[must_use]
    pub fn conversations_path(&self) -> PathBuf {
        self.input_dir.join(&self.conversations_file)
    }

    #[must_use]
    pub fn projects_path(&self) -> PathBuf {
        self.input_dir.join(&self.projects_file)
    }

    #[must_use]
    pub fn memories_path(&self) -> PathBuf {
        self.input_dir.join(&self.memories_file)
    }

    #[must_use]
    pub fn summary_path(&self) -> PathBuf {
        self.output_dir.join(&self.summary_file)
    }

    #[must_use]
    pub fn records_path(&self) -> PathBuf {
        self.output_dir.join(&self.records_file)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn paths_join_directory_and_file() {
        let config = PathsConfig::default();
        assert_eq!(
            config.conversations_path(),
            Path::new("raw-exports/conversations.json")
        );
        assert_eq!(config.summary_path(), Path::new("analysis/summary.json"));
        assert_eq!(
            config.records_path(),
            Path::new("analysis/conversations.jsonl")
        );
    }
}
