use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(&serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table(value: &Value) -> anyhow::Result<String> {
    let options = table_options();
    match value {
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["metric", "value"], &rows, options))
        }
        Value::Array(items) => Ok(render_array_table(items, options)),
        scalar => Ok(table::render_table(
            &["value"],
            &[vec![value_to_cell(scalar)]],
            options,
        )),
    }
}

/// Objects become rows with one column per key, in first-seen key order.
fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let mut headers = Vec::<&str>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key.as_str());
            }
        }
    }

    if headers.is_empty() {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, options);
    }

    let rows = items
        .iter()
        .map(|item| {
            headers
                .iter()
                .map(|header| {
                    item.get(*header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    table::render_table(&headers, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Headline {
        conversations: u64,
        busiest_month: Option<&'static str>,
    }

    const HEADLINE: Headline = Headline {
        conversations: 12,
        busiest_month: None,
    };

    #[test]
    fn json_render_is_pretty() {
        let out = render(&HEADLINE, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["conversations"], 12);
        assert!(out.contains('\n'));
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&HEADLINE, OutputFormat::Raw).expect("raw render should work");
        assert_eq!(out, r#"{"conversations":12,"busiest_month":null}"#);
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let out = render(&HEADLINE, OutputFormat::Table).expect("table render should work");
        let lines = out.lines().collect::<Vec<_>>();
        assert!(lines[0].starts_with("metric"));
        assert!(lines.iter().any(|line| line.starts_with("busiest_month") && line.ends_with('-')));
        assert!(lines.iter().any(|line| line.starts_with("conversations") && line.ends_with("12")));
    }

    #[test]
    fn table_render_for_array_uses_object_keys() {
        let rows = serde_json::json!([
            {"topic": "Programming", "count": 4},
            {"topic": "Other", "count": 2}
        ]);
        let out = render(&rows, OutputFormat::Table).expect("table render should work");
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("topic") && lines[0].contains("count"));
        assert!(lines[2].contains("Programming"));
        assert!(lines[3].contains("Other"));
    }
}
