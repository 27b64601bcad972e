use anyhow::Context;
use chrono::Utc;
use serde::Serialize;
use wrap_analysis::{Analysis, Pipeline, load_export, write_outputs};
use wrap_config::WrapConfig;
use wrap_core::summary::Summary;

use crate::bootstrap;
use crate::cli::root_commands::AnalyzeArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;
use crate::progress::Progress;

/// Handle `wrapped analyze`.
pub fn handle(args: &AnalyzeArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut config = bootstrap::load_config(flags)?;
    apply_overrides(&mut config, args);
    config
        .validate()
        .context("invalid command-line overrides")?;
    let year = config.analysis.resolve_year(Utc::now());

    let progress = Progress::spinner("Loading export");
    let analysis = match run(&config, year, args, &progress) {
        Ok(analysis) => analysis,
        Err(error) => {
            progress.finish_err("analysis failed");
            return Err(error);
        }
    };
    progress.finish_clear();

    match flags.format {
        OutputFormat::Table => output(&Overview::from(&analysis.summary), flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(&analysis.summary, flags.format),
    }
}

fn run(
    config: &WrapConfig,
    year: i32,
    args: &AnalyzeArgs,
    progress: &Progress,
) -> anyhow::Result<Analysis> {
    let export = load_export(&config.paths).with_context(|| {
        format!(
            "failed to load export from {}",
            config.paths.input_dir.display()
        )
    })?;

    progress.set_message("Aggregating conversations");
    let analysis = Pipeline::new(config, year).run(&export);

    if args.no_write {
        tracing::info!("--no-write given; skipping output files");
    } else {
        progress.set_message("Writing summary");
        write_outputs(
            &config.paths,
            &analysis.summary,
            &analysis.conversations,
            args.records,
        )
        .with_context(|| {
            format!(
                "failed to write results to {}",
                config.paths.output_dir.display()
            )
        })?;
    }

    Ok(analysis)
}

fn apply_overrides(config: &mut WrapConfig, args: &AnalyzeArgs) {
    if let Some(input) = &args.input {
        config.paths.input_dir.clone_from(input);
    }
    if let Some(output) = &args.output {
        config.paths.output_dir.clone_from(output);
    }
    if let Some(year) = args.year {
        config.analysis.year = Some(year);
    }
    if let Some(offset) = args.utc_offset {
        config.analysis.utc_offset = offset;
    }
}

/// Flat headline view used for `--format table`.
#[derive(Debug, Serialize)]
struct Overview {
    year: i32,
    utc_offset: String,
    conversations: u64,
    messages: u64,
    human_words: u64,
    assistant_words: u64,
    total_words: u64,
    projects: u64,
    memories: u64,
    top_topic: Option<String>,
    peak_hour: Option<String>,
    peak_weekday: Option<String>,
    busiest_month: Option<String>,
    total_co2_kg: f64,
    skipped_conversations: u64,
}

impl From<&Summary> for Overview {
    fn from(summary: &Summary) -> Self {
        Self {
            year: summary.context.year,
            utc_offset: summary.context.utc_offset.clone(),
            conversations: summary.headline.conversations,
            messages: summary.headline.messages,
            human_words: summary.headline.human_words,
            assistant_words: summary.headline.assistant_words,
            total_words: summary.headline.total_words,
            projects: summary.headline.projects,
            memories: summary.headline.memories,
            top_topic: summary.topics.top.first().map(|t| t.topic.clone()),
            peak_hour: summary.peak_usage.hour.as_ref().map(|h| h.label.clone()),
            peak_weekday: summary.peak_usage.weekday.map(|w| w.day.to_string()),
            busiest_month: summary.records.busiest_month.as_ref().map(|m| m.month.clone()),
            total_co2_kg: summary.energy.total_co2_kg,
            skipped_conversations: summary.skipped.conversations.total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wrap_analysis::Export;

    use super::*;

    fn args() -> AnalyzeArgs {
        AnalyzeArgs {
            input: None,
            output: None,
            year: None,
            utc_offset: None,
            records: false,
            no_write: false,
        }
    }

    #[test]
    fn overrides_replace_only_given_values() {
        let mut config = WrapConfig::default();
        apply_overrides(
            &mut config,
            &AnalyzeArgs {
                input: Some(PathBuf::from("exports/2025")),
                year: Some(2024),
                utc_offset: Some("+09:00".parse().unwrap()),
                ..args()
            },
        );

        assert_eq!(config.paths.input_dir, Path::new("exports/2025"));
        assert_eq!(config.paths.output_dir, Path::new("analysis"));
        assert_eq!(config.analysis.year, Some(2024));
        assert_eq!(config.analysis.utc_offset.to_string(), "+09:00");
    }

    #[test]
    fn implausible_year_fails_validation() {
        let mut config = WrapConfig::default();
        apply_overrides(
            &mut config,
            &AnalyzeArgs {
                year: Some(25),
                ..args()
            },
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn run_without_write_leaves_output_dir_alone() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = WrapConfig::default();
        config.paths.input_dir = dir.path().to_path_buf();
        config.paths.output_dir = dir.path().join("analysis");
        std::fs::write(
            config.paths.conversations_path(),
            json!([{"name": "Trip itinerary", "created_at": "2025-08-01T18:00:00Z"}]).to_string(),
        )
        .unwrap();

        let analysis = run(
            &config,
            2025,
            &AnalyzeArgs {
                no_write: true,
                ..args()
            },
            &Progress::spinner("test"),
        )
        .unwrap();

        assert_eq!(analysis.summary.headline.conversations, 1);
        assert!(!config.paths.output_dir.exists());
    }

    #[test]
    fn run_reports_missing_export_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = WrapConfig::default();
        config.paths.input_dir = dir.path().join("nowhere");

        let error = run(&config, 2025, &args(), &Progress::spinner("test")).unwrap_err();
        let message = format!("{error:#}");
        assert!(message.contains("failed to load export"));
        assert!(message.contains("conversations.json"));
    }

    #[test]
    fn overview_flattens_the_headline() {
        let export = Export {
            conversations: vec![
                serde_json::from_value(json!({
                    "name": "Trip itinerary",
                    "created_at": "2025-08-01T18:00:00Z",
                    "chat_messages": [
                        {"sender": "human", "text": "plan it", "created_at": "2025-08-01T18:00:00Z"}
                    ]
                }))
                .unwrap(),
            ],
            ..Export::default()
        };
        let summary = Pipeline::new(&WrapConfig::default(), 2025).run(&export).summary;
        let overview = Overview::from(&summary);

        assert_eq!(overview.conversations, 1);
        assert_eq!(overview.human_words, 2);
        assert_eq!(overview.top_topic.as_deref(), Some("Travel"));
        assert_eq!(overview.peak_hour.as_deref(), Some("12 PM"));
        assert_eq!(overview.peak_weekday.as_deref(), Some("Friday"));
        assert_eq!(overview.busiest_month.as_deref(), Some("2025-08"));
    }
}
