use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `wrapped` binary.
#[derive(Debug, Parser)]
#[command(
    name = "wrapped",
    version,
    about = "Year-in-review statistics for chat assistant exports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only, no progress)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra TOML config file layered over wrapped.toml
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::root_commands::SchemaDocument;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["wrapped", "--format", "table", "--verbose", "analyze"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Analyze(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["wrapped", "schema", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Schema(_)));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["wrapped", "--format", "xml", "analyze"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn analyze_accepts_overrides() {
        let cli = Cli::try_parse_from([
            "wrapped",
            "analyze",
            "--input",
            "exports",
            "--output",
            "out",
            "--year",
            "2024",
            "--utc-offset",
            "-05:00",
            "--records",
        ])
        .expect("cli should parse");

        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.input.as_deref(), Some(Path::new("exports")));
        assert_eq!(args.output.as_deref(), Some(Path::new("out")));
        assert_eq!(args.year, Some(2024));
        assert_eq!(args.utc_offset.map(|o| o.to_string()).as_deref(), Some("-05:00"));
        assert!(args.records);
        assert!(!args.no_write);
    }

    #[test]
    fn no_write_conflicts_with_records() {
        let parsed = Cli::try_parse_from(["wrapped", "analyze", "--records", "--no-write"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn analyze_rejects_bad_offset() {
        let parsed = Cli::try_parse_from(["wrapped", "analyze", "--utc-offset", "+15:00"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn schema_defaults_to_summary_document() {
        let cli = Cli::try_parse_from(["wrapped", "schema"]).expect("cli should parse");
        let Commands::Schema(args) = cli.command else {
            panic!("expected schema");
        };
        assert_eq!(args.document, SchemaDocument::Summary);
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["wrapped", "--config", "/tmp/extra.toml", "config"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.config.as_deref(), Some(Path::new("/tmp/extra.toml")));
        assert!(matches!(cli.command, Commands::Config(_)));
    }
}
