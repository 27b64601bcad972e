use schemars::schema_for;
use serde_json::Value;
use wrap_core::derived::DerivedConversation;
use wrap_core::summary::Summary;

use crate::cli::root_commands::{SchemaArgs, SchemaDocument};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `wrapped schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_value(args.document)?;
    // A schema has no sensible tabular form.
    let format = match flags.format {
        OutputFormat::Table => OutputFormat::Json,
        other => other,
    };
    output(&schema, format)
}

fn schema_value(document: SchemaDocument) -> anyhow::Result<Value> {
    let schema = match document {
        SchemaDocument::Summary => schema_for!(Summary),
        SchemaDocument::Conversation => schema_for!(DerivedConversation),
    };
    Ok(serde_json::to_value(schema)?)
}
