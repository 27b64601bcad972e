use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use wrap_core::time::LocalOffset;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Analyze an export directory and write the summary.
    Analyze(AnalyzeArgs),
    /// Print the JSON Schema of a published document.
    Schema(SchemaArgs),
    /// Print the effective configuration as TOML.
    Config(ConfigArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    /// Directory holding conversations.json, projects.json, memories.json
    #[arg(long, value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Directory summary.json is written to
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Calendar year to summarize (defaults to the current local year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Fixed local offset, e.g. -06:00, +0530, Z
    #[arg(long, value_name = "OFFSET", allow_hyphen_values = true)]
    pub utc_offset: Option<LocalOffset>,

    /// Also write per-conversation records as JSON Lines
    #[arg(long)]
    pub records: bool,

    /// Print the summary without writing any files
    #[arg(long, conflicts_with = "records")]
    pub no_write: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Which document to describe
    #[arg(value_enum, default_value = "summary")]
    pub document: SchemaDocument,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaDocument {
    /// summary.json
    Summary,
    /// One line of conversations.jsonl
    Conversation,
}

#[derive(Clone, Debug, Args)]
pub struct ConfigArgs {
    /// Print built-in defaults instead of the layered configuration
    #[arg(long)]
    pub default: bool,
}
