//! Writing the summary and per-conversation records.

use std::fs;
use std::path::{Path, PathBuf};

use wrap_config::PathsConfig;
use wrap_core::derived::DerivedConversation;
use wrap_core::summary::Summary;

use crate::error::AnalysisError;

/// Paths of the files a run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrittenFiles {
    pub summary: PathBuf,
    pub records: Option<PathBuf>,
}

/// Write `summary.json` and, when `records` is set, `conversations.jsonl`.
///
/// The summary is serialized before anything touches the disk.
///
/// # Errors
///
/// Returns `AnalysisError::Serialize` or `AnalysisError::Write`.
pub fn write_outputs(
    paths: &PathsConfig,
    summary: &Summary,
    conversations: &[DerivedConversation],
    records: bool,
) -> Result<WrittenFiles, AnalysisError> {
    let mut document =
        serde_json::to_string_pretty(summary).map_err(|source| AnalysisError::Serialize {
            what: "summary",
            source,
        })?;
    document.push('\n');

    create_dir(&paths.output_dir)?;

    let summary_path = paths.summary_path();
    fs::write(&summary_path, document).map_err(|source| write_error(&summary_path, source))?;
    tracing::info!(path = %summary_path.display(), "wrote summary");

    let records_path = if records {
        let path = paths.records_path();
        serde_jsonlines::write_json_lines(&path, conversations)
            .map_err(|source| write_error(&path, source))?;
        tracing::info!(path = %path.display(), count = conversations.len(), "wrote conversation records");
        Some(path)
    } else {
        None
    };

    Ok(WrittenFiles {
        summary: summary_path,
        records: records_path,
    })
}

fn create_dir(dir: &Path) -> Result<(), AnalysisError> {
    fs::create_dir_all(dir).map_err(|source| write_error(dir, source))
}

fn write_error(path: &Path, source: std::io::Error) -> AnalysisError {
    AnalysisError::Write {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use wrap_config::WrapConfig;

    use super::*;
    use crate::load::Export;
    use crate::pipeline::Pipeline;

    fn paths_in(dir: &TempDir) -> PathsConfig {
        PathsConfig {
            output_dir: dir.path().join("nested").join("analysis"),
            ..PathsConfig::default()
        }
    }

    #[test]
    fn creates_missing_output_dir_and_writes_summary() {
        let dir = TempDir::new().unwrap();
        let paths = paths_in(&dir);
        let analysis = Pipeline::new(&WrapConfig::default(), 2025).run(&Export::default());

        let written = write_outputs(&paths, &analysis.summary, &analysis.conversations, false)
            .unwrap();

        assert_eq!(written.records, None);
        let text = fs::read_to_string(&written.summary).unwrap();
        assert!(text.ends_with('\n'));
        let parsed: Summary = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, analysis.summary);
        assert!(!paths.records_path().exists());
    }

    #[test]
    fn records_file_has_one_line_per_conversation() {
        let dir = TempDir::new().unwrap();
        let paths = paths_in(&dir);
        let export = Export {
            conversations: vec![
                serde_json::from_value(serde_json::json!({
                    "name": "one", "created_at": "2025-05-01T12:00:00Z"
                }))
                .unwrap(),
                serde_json::from_value(serde_json::json!({
                    "name": "two", "created_at": "2025-05-02T12:00:00Z"
                }))
                .unwrap(),
            ],
            ..Export::default()
        };
        let analysis = Pipeline::new(&WrapConfig::default(), 2025).run(&export);

        let written =
            write_outputs(&paths, &analysis.summary, &analysis.conversations, true).unwrap();

        let path = written.records.unwrap();
        let read: Vec<DerivedConversation> = serde_jsonlines::json_lines(&path)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(read, analysis.conversations);
    }
}
