use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use serde_json::Value;

use crate::args::{GlobalArgs, OutputFormat};

/// Rendering settings shared by all command handlers (`-o` and `--fields`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Output {
  format: OutputFormat,
  fields: Option<String>,
}

impl Output {
  pub(crate) fn new(format: OutputFormat, fields: Option<String>) -> Self {
    Self { format, fields }
  }

  pub(crate) fn from_args(args: &GlobalArgs) -> Self {
    Self::new(args.output, args.fields.clone())
  }

  /// Render a single record (`auto` shows it as detail).
  pub(crate) fn record<T: Serialize>(&self, value: &T) -> Result<String> {
    self.render(value, OutputFormat::Detail, &[])
  }

  /// Render a list of records (`auto` shows it as a table with `columns`).
  pub(crate) fn list<T: Serialize>(&self, columns: &[&str], rows: &[T]) -> Result<String> {
    self.render(&rows, OutputFormat::Table, columns)
  }

  fn render<T: Serialize>(&self, value: &T, auto: OutputFormat, columns: &[&str]) -> Result<String> {
    let mut value = serde_json::to_value(value).context("failed to serialize output")?;
    let mut format = self.format;
    if let Some(expr) = &self.fields {
      value = select(&value, expr)
        .cloned()
        .ok_or_else(|| anyhow!("field {expr:?} not found in output"))?;
      if format == OutputFormat::Auto {
        format = OutputFormat::Json;
      }
    }
    match format {
      OutputFormat::Json => serde_json::to_string_pretty(&value).map_err(Into::into),
      OutputFormat::Yaml => serde_yaml::to_string(&value).map_err(Into::into),
      OutputFormat::Table => Ok(table(&value, columns)),
      OutputFormat::Detail => Ok(detail(&value)),
      OutputFormat::Auto if auto == OutputFormat::Table => Ok(table(&value, columns)),
      OutputFormat::Auto => Ok(detail(&value)),
    }
  }
}

/// Write rendered output to stdout, ending it with exactly one newline.
pub(crate) fn print(rendered: &str) {
  anstream::println!("{}", rendered.trim_end_matches('\n'));
}

/// Look up a dotted path such as `.contexts.0.name`; `.` alone is the whole value.
pub(crate) fn select<'a>(value: &'a Value, expr: &str) -> Option<&'a Value> {
  expr
    .trim()
    .trim_start_matches('.')
    .split('.')
    .filter(|segment| !segment.is_empty())
    .try_fold(value, |current, segment| match current {
      Value::Object(map) => map.get(segment),
      Value::Array(items) => segment.parse::<usize>().ok().and_then(|idx| items.get(idx)),
      _ => None,
    })
}

fn scalar(value: &Value) -> String {
  match value {
    Value::Null => String::new(),
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}

fn detail(value: &Value) -> String {
  match value {
    Value::Object(map) => {
      let width = map.keys().map(String::len).max().unwrap_or(0);
      map
        .iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| format!("{:<width$}  {}\n", format!("{k}:"), scalar(v), width = width + 1))
        .collect()
    }
    Value::Array(items) => items.iter().map(detail).collect::<Vec<_>>().join("\n"),
    other => format!("{}\n", scalar(other)),
  }
}

fn table(value: &Value, columns: &[&str]) -> String {
  let Value::Array(items) = value else {
    return detail(value);
  };
  let mut rows: Vec<Vec<String>> = vec![columns.iter().map(|c| c.to_uppercase()).collect()];
  for item in items {
    rows.push(
      columns
        .iter()
        .map(|c| item.get(*c).map(scalar).unwrap_or_default())
        .collect(),
    );
  }
  let widths: Vec<usize> = (0..columns.len())
    .map(|i| rows.iter().map(|r| r[i].len()).max().unwrap_or(0))
    .collect();
  rows
    .iter()
    .map(|row| {
      let cells: Vec<String> = row
        .iter()
        .zip(&widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
      format!("{}\n", cells.join("  ").trim_end())
    })
    .collect()
}
