use serde_json::Value;
use std::io;
use tabled::{builder::Builder, Table};

use crate::OutputFormat;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => print_table(value),
        OutputFormat::Csv => print_csv(value),
        OutputFormat::Minimal => print_minimal(value),
    }
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}

fn print_table(value: &Value) {
    match value {
        Value::Array(arr) => print_array_table(arr),
        _ => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (field, rendered) in flatten(value) {
                builder.push_record([field.as_str(), rendered.as_str()]);
            }
            println!("{}", Table::from(builder));
        }
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    // Column headers come from the first object.
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(render_scalar).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }
        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", render_scalar(item));
        }
    }
}

fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Array(arr) => {
            if let Some(Value::Object(first)) = arr.first() {
                let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
                let _ = wtr.write_record(&headers);
                for item in arr {
                    if let Value::Object(map) = item {
                        let row: Vec<String> = headers
                            .iter()
                            .map(|h| map.get(*h).map(render_scalar).unwrap_or_default())
                            .collect();
                        let _ = wtr.write_record(&row);
                    }
                }
            }
        }
        _ => {
            let _ = wtr.write_record(["field", "value"]);
            for (field, rendered) in flatten(value) {
                let _ = wtr.write_record([field.as_str(), rendered.as_str()]);
            }
        }
    }

    let _ = wtr.flush();
}

/// Print just the headline value: the combined help text, the report, or the
/// monthly payment, in that order of preference.
fn print_minimal(value: &Value) {
    const PRIORITY: [&str; 4] = ["text", "report", "quota", "monthly_payment"];

    let rows = flatten(value);
    for key in PRIORITY {
        let hit = rows
            .iter()
            .find(|(field, _)| field == key || field.ends_with(&format!(".{key}")));
        if let Some((_, rendered)) = hit {
            println!("{}", rendered);
            return;
        }
    }

    match rows.first() {
        Some((field, rendered)) if field.is_empty() => println!("{}", rendered),
        Some((field, rendered)) => println!("{}: {}", field, rendered),
        None => println!("{}", value),
    }
}

/// Flatten nested objects into dotted field paths with rendered values.
fn flatten(value: &Value) -> Vec<(String, String)> {
    let mut rows = Vec::new();
    flatten_into("", value, &mut rows);
    rows
}

fn flatten_into(prefix: &str, value: &Value, rows: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(&path, val, rows);
            }
        }
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(render_scalar).collect();
            rows.push((prefix.to_string(), items.join(", ")));
        }
        other => rows.push((prefix.to_string(), render_scalar(other))),
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
