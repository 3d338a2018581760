use campus_console::toast::{Toast, ToastKind};
use campus_console::view::TableView;
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_value_table(&serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render a dashboard table. JSON formats serialize the view model itself.
pub fn render_view(view: &TableView, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(table::render_view(view, table_options())),
        OutputFormat::Json | OutputFormat::Raw => render(view, format),
    }
}

pub fn output_view(view: &TableView, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_view(view, format)?;
    println!("{rendered}");
    Ok(())
}

/// Toasts go to stderr so stdout stays machine-readable.
pub fn print_toasts(toasts: &[Toast]) {
    if !ui::prefs().toasts {
        return;
    }
    for toast in toasts {
        let mark = match toast.kind {
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
        };
        eprintln!("{mark} {}", toast.message);
    }
}

fn render_value_table(value: &Value) -> anyhow::Result<String> {
    let options = table_options();
    match value {
        Value::Object(map) => {
            let rows: Vec<Vec<String>> = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect();
            Ok(table::render_plain(&["field", "value"], &rows, options))
        }
        Value::Array(items) if items.iter().all(Value::is_object) && !items.is_empty() => {
            let mut headers: Vec<&str> = Vec::new();
            for key in items.iter().filter_map(Value::as_object).flat_map(|map| map.keys()) {
                if !headers.contains(&key.as_str()) {
                    headers.push(key);
                }
            }
            let rows: Vec<Vec<String>> = items
                .iter()
                .filter_map(Value::as_object)
                .map(|map| {
                    headers
                        .iter()
                        .map(|header| map.get(*header).map_or_else(String::new, value_to_cell))
                        .collect()
                })
                .collect();
            Ok(table::render_plain(&headers, &rows, options))
        }
        Value::Array(items) if items.is_empty() => Ok(String::from("(no rows)")),
        Value::Array(items) => {
            let rows: Vec<Vec<String>> = items.iter().map(|item| vec![value_to_cell(item)]).collect();
            Ok(table::render_plain(&["value"], &rows, options))
        }
        scalar => Ok(value_to_cell(scalar)),
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
